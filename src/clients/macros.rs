/// Generates a body-less GET endpoint taking the issuing [`GooseUser`](goose::prelude::GooseUser).
///
/// The optional id parameter is substituted into `$path` by name, while `$label`
/// keeps the placeholder so every id reports under one request name.
macro_rules! get_endpoint {
    (fn $method:ident() at $path:literal as $label:literal) => {
        #[tracing::instrument(skip(user))]
        pub async fn $method(user: &mut goose::prelude::GooseUser) -> $crate::clients::RequestResult {
            tracing::debug!("Sending request");
            $crate::clients::named_get(user, $path, $label).await
        }
    };
    (fn $method:ident($id:ident: $id_type:ty) at $path:literal as $label:literal) => {
        #[tracing::instrument(skip(user))]
        pub async fn $method(
            user: &mut goose::prelude::GooseUser,
            $id: $id_type,
        ) -> $crate::clients::RequestResult {
            tracing::debug!("Sending request");
            $crate::clients::named_get(user, &format!($path, $id = $id), $label).await
        }
    };
}
