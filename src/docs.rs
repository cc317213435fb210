use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use alumnet_core::pagination::{PaginationMeta, PaginationParams};

use crate::modules::alumni::model::{
    Alumni, AlumniMessageResponse, CreateAlumniDto, PaginatedAlumniResponse, UpdateAlumniDto,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, LoginUser, RegisterRequest, RegisterResponse,
};
use crate::modules::pekerjaan::model::{
    CreatePekerjaanDto, PaginatedPekerjaanResponse, Pekerjaan, PekerjaanListResponse,
    PekerjaanMessageResponse, UpdatePekerjaanDto,
};
use crate::modules::uploads::model::{Upload, UploadResponse};
use crate::modules::users::model::{UserPublic, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::alumni::controller::get_all_alumni,
        crate::modules::alumni::controller::get_alumni_by_id,
        crate::modules::alumni::controller::create_alumni,
        crate::modules::alumni::controller::update_alumni,
        crate::modules::alumni::controller::delete_alumni,
        crate::modules::pekerjaan::controller::get_all_pekerjaan,
        crate::modules::pekerjaan::controller::get_my_pekerjaan,
        crate::modules::pekerjaan::controller::get_pekerjaan_by_id,
        crate::modules::pekerjaan::controller::create_pekerjaan,
        crate::modules::pekerjaan::controller::update_pekerjaan,
        crate::modules::pekerjaan::controller::delete_pekerjaan,
        crate::modules::uploads::controller::upload_photo,
        crate::modules::uploads::controller::upload_certificate,
    ),
    components(
        schemas(
            UserPublic,
            UserRole,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            LoginUser,
            Alumni,
            CreateAlumniDto,
            UpdateAlumniDto,
            PaginatedAlumniResponse,
            AlumniMessageResponse,
            Pekerjaan,
            CreatePekerjaanDto,
            UpdatePekerjaanDto,
            PaginatedPekerjaanResponse,
            PekerjaanListResponse,
            PekerjaanMessageResponse,
            Upload,
            UploadResponse,
            ErrorResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Alumni", description = "Alumni management endpoints"),
        (name = "Pekerjaan", description = "Alumni employment record endpoints"),
        (name = "Uploads", description = "Photo and certificate uploads")
    ),
    info(
        title = "Alumnet API",
        version = "0.1.0",
        description = "A REST API for managing university alumni, their employment records and uploaded documents, with JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
