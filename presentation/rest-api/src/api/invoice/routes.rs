use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::invoice::use_cases::get_all::ListInvoicesUseCase;
use business::domain::invoice::use_cases::get_by_order::GetInvoiceByOrderUseCase;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::invoice::dto::InvoiceResponse;
use crate::api::tags::ApiTags;

pub struct InvoiceApi {
    get_by_order_use_case: Arc<dyn GetInvoiceByOrderUseCase>,
    list_use_case: Arc<dyn ListInvoicesUseCase>,
}

impl InvoiceApi {
    pub fn new(
        get_by_order_use_case: Arc<dyn GetInvoiceByOrderUseCase>,
        list_use_case: Arc<dyn ListInvoicesUseCase>,
    ) -> Self {
        Self {
            get_by_order_use_case,
            list_use_case,
        }
    }
}

/// Invoice API
///
/// Invoices are issued by checkout and immutable afterwards; these endpoints
/// only read them.
#[OpenApi]
impl InvoiceApi {
    /// List the user's invoices
    #[oai(path = "/invoices", method = "get", tag = "ApiTags::Invoices")]
    async fn get_all(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
    ) -> ListInvoicesResponse {
        match self.list_use_case.execute(UserId::new(user_id.0)).await {
            Ok(invoices) => {
                let responses: Vec<InvoiceResponse> =
                    invoices.into_iter().map(|invoice| invoice.into()).collect();
                ListInvoicesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListInvoicesResponse::InternalError(json)
            }
        }
    }

    /// Get the invoice of an order
    #[oai(
        path = "/orders/:order_id/invoice",
        method = "get",
        tag = "ApiTags::Invoices"
    )]
    async fn get_by_order(&self, order_id: Path<String>) -> GetInvoiceResponse {
        let order_id = match Uuid::parse_str(&order_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetInvoiceResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        match self.get_by_order_use_case.execute(order_id).await {
            Ok(invoice) => GetInvoiceResponse::Ok(Json(invoice.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetInvoiceResponse::NotFound(json),
                    _ => GetInvoiceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListInvoicesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<InvoiceResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetInvoiceResponse {
    #[oai(status = 200)]
    Ok(Json<InvoiceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
