use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::rate::{RateProductParams, RateProductUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, RateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    rate_use_case: Arc<dyn RateProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        rate_use_case: Arc<dyn RateProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            rate_use_case,
        }
    }
}

fn bad_request(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Create a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let Some(price) = body.0.price.to_money() else {
            return CreateProductResponse::BadRequest(bad_request("product.invalid_currency"));
        };

        let params = CreateProductParams {
            user_id: UserId::new(user_id.0),
            name: body.0.name,
            description: body.0.description,
            price,
            quantity: body.0.quantity,
            available: body.0.available.unwrap_or(true),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_by_id(&self, id: Path<String>) -> GetProductResponse {
        let product_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductResponse::BadRequest(bad_request("product.invalid_id"));
            }
        };

        match self.get_by_id_use_case.execute(product_id).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Rate a product
    ///
    /// Records the user's rating, replacing any previous one, and returns
    /// the product with its refreshed rating aggregate.
    #[oai(
        path = "/products/:id/ratings",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn rate(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        id: Path<String>,
        body: Json<RateProductRequest>,
    ) -> RateProductResponse {
        let product_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RateProductResponse::BadRequest(bad_request("product.invalid_id"));
            }
        };

        let params = RateProductParams {
            user_id: UserId::new(user_id.0),
            product_id,
            value: body.0.rating,
        };

        match self.rate_use_case.execute(params).await {
            Ok(product) => RateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RateProductResponse::BadRequest(json),
                    404 => RateProductResponse::NotFound(json),
                    _ => RateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
