use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A stored glossary entry.
#[derive(ToSchema)]
pub struct TermDoc {
    /// Assigned by the store on creation
    pub id: i32,
    pub term: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct TermCreateDoc {
    #[schema(min_length = 1, example = "HTTP")]
    pub term: String,
    #[schema(min_length = 1, example = "Protocol for transferring hypertext")]
    pub description: String,
}

/// Omitted fields keep their stored values.
#[derive(ToSchema)]
pub struct TermUpdateDoc {
    #[schema(min_length = 1)]
    pub term: Option<String>,
    #[schema(min_length = 1)]
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glossary API",
        version = "1.0.0",
        description = "Glossary term management: list, look up, add, update and delete terms.",
        contact(name = "API Support", email = "support@example.com"),
        license(name = "MIT")
    ),
    paths(
        crate::routes::health,
        crate::routes::terms::list,
        crate::routes::terms::get,
        crate::routes::terms::create,
        crate::routes::terms::update,
        crate::routes::terms::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TermDoc,
            TermCreateDoc,
            TermUpdateDoc,
            DetailDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "terms")
    )
)]
pub struct ApiDoc;
