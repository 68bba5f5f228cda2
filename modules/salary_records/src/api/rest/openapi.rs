//! OpenAPI document for the REST surface

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Salary Records API"),
    components(schemas(
        SalaryRecordDto,
        SalaryRecordRequest,
        DeleteResponse,
        HealthResponse,
        BackendDto
    ))
)]
pub struct ApiDoc;
