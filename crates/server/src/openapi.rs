use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Creation payload. Additional fields beyond the required three are
/// accepted and stored verbatim. Field casing follows the permit dataset.
#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct CreateFoodTruckRequest {
    pub locationid: i64,
    #[schema(example = "Test Food Truck")]
    pub Applicant: String,
    #[schema(example = "Truck")]
    pub FacilityType: String,
}

/// Partial update payload; present keys overwrite, absent keys are kept.
#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UpdateFoodTruckRequest {
    pub Applicant: Option<String>,
    pub FacilityType: Option<String>,
}

#[derive(ToSchema)]
pub struct FieldErrorDoc {
    pub field: String,
    pub msg: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::liveness,
        crate::routes::health,
        crate::routes::trucks::list,
        crate::routes::trucks::get,
        crate::routes::trucks::create,
        crate::routes::trucks::update,
        crate::routes::trucks::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreateFoodTruckRequest,
            UpdateFoodTruckRequest,
            FieldErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "food-trucks")
    )
)]
pub struct ApiDoc;
