use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::order::use_cases::advance::{AdvanceOrderParams, AdvanceOrderUseCase};
use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::{ListOrdersParams, ListOrdersUseCase};
use business::domain::order::use_cases::get_by_id::GetOrderByIdUseCase;
use business::domain::order::use_cases::get_cart::GetCartUseCase;
use business::domain::order::use_cases::list_cart_items::ListCartItemsUseCase;
use business::domain::order::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    AddCartItemRequest, AdvanceOrderRequest, CreateOrderRequest, ItemResponse, OrderResponse,
};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    list_cart_items_use_case: Arc<dyn ListCartItemsUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    list_use_case: Arc<dyn ListOrdersUseCase>,
    create_use_case: Arc<dyn CreateOrderUseCase>,
    advance_use_case: Arc<dyn AdvanceOrderUseCase>,
}

impl OrderApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        list_cart_items_use_case: Arc<dyn ListCartItemsUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        list_use_case: Arc<dyn ListOrdersUseCase>,
        create_use_case: Arc<dyn CreateOrderUseCase>,
        advance_use_case: Arc<dyn AdvanceOrderUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            list_cart_items_use_case,
            add_item_use_case,
            remove_item_use_case,
            get_by_id_use_case,
            list_use_case,
            create_use_case,
            advance_use_case,
        }
    }
}

fn bad_request(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

/// Order and cart management API
///
/// The authenticated user is identified by the `X-User-Id` header placed by
/// the upstream auth gateway.
#[OpenApi]
impl OrderApi {
    /// List the user's orders
    ///
    /// Optionally filtered by lifecycle status.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        status: Query<Option<String>>,
    ) -> ListOrdersResponse {
        let status = match &status.0 {
            Some(raw) => match raw.parse::<OrderStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    return ListOrdersResponse::BadRequest(bad_request("order.invalid_status"));
                }
            },
            None => None,
        };

        let params = ListOrdersParams {
            user_id: UserId::new(user_id.0),
            status,
        };

        match self.list_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> =
                    orders.into_iter().map(|order| order.into()).collect();
                ListOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListOrdersResponse::InternalError(json)
            }
        }
    }

    /// Create an order
    ///
    /// Explicit checkout-intent creation; carts themselves are created
    /// implicitly by the cart endpoints.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        body: Json<CreateOrderRequest>,
    ) -> CreateOrderResponse {
        let status = match &body.0.status {
            Some(raw) => match raw.parse::<OrderStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    return CreateOrderResponse::BadRequest(bad_request("order.invalid_status"));
                }
            },
            None => None,
        };

        let params = CreateOrderParams {
            user_id: UserId::new(user_id.0),
            status,
            address: body.0.address.map(|address| address.into_props()),
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateOrderResponse::BadRequest(json),
                    _ => CreateOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the user's cart
    ///
    /// Returns the single open cart, creating an empty one when none exists.
    #[oai(path = "/orders/cart", method = "get", tag = "ApiTags::Orders")]
    async fn get_cart(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
    ) -> GetCartResponse {
        match self
            .get_cart_use_case
            .execute(UserId::new(user_id.0))
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// List cart items
    ///
    /// Returns the user's cart with its line items loaded.
    #[oai(path = "/orders/cart/items", method = "get", tag = "ApiTags::Orders")]
    async fn get_cart_items(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
    ) -> ListCartItemsResponse {
        match self
            .list_cart_items_use_case
            .execute(UserId::new(user_id.0))
            .await
        {
            Ok(cart) => ListCartItemsResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCartItemsResponse::InternalError(json)
            }
        }
    }

    /// Add an item to the cart
    ///
    /// Adding a product already present in the cart merges by summing
    /// quantities and re-snapshots the unit price.
    #[oai(path = "/orders/cart/items", method = "post", tag = "ApiTags::Orders")]
    async fn add_cart_item(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddCartItemResponse::BadRequest(bad_request("order.invalid_product_id"));
            }
        };

        let params = AddCartItemParams {
            user_id: UserId::new(user_id.0),
            product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddCartItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from the cart
    ///
    /// Only items belonging to the user's own cart are removed; other ids
    /// are ignored.
    #[oai(
        path = "/orders/cart/items/:id",
        method = "delete",
        tag = "ApiTags::Orders"
    )]
    async fn remove_cart_item(
        &self,
        #[oai(name = "X-User-Id")] user_id: Header<String>,
        id: Path<String>,
    ) -> RemoveCartItemResponse {
        let item_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveCartItemResponse::BadRequest(bad_request("order.invalid_item_id"));
            }
        };

        let params = RemoveCartItemParams {
            user_id: UserId::new(user_id.0),
            item_id,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => RemoveCartItemResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }

    /// Get an order by id
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_by_id(&self, id: Path<String>) -> GetOrderResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetOrderResponse::BadRequest(bad_request("order.invalid_id"));
            }
        };

        match self.get_by_id_use_case.execute(order_id).await {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Advance an order's status
    ///
    /// Moves the order one step through its lifecycle. Leaving the cart
    /// validates the shipping address, creates a replacement cart and issues
    /// the invoice in one transaction.
    #[oai(path = "/orders/:id", method = "put", tag = "ApiTags::Orders")]
    async fn advance(&self, id: Path<String>, body: Json<AdvanceOrderRequest>) -> AdvanceOrderResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AdvanceOrderResponse::BadRequest(bad_request("order.invalid_id"));
            }
        };

        let status = match body.0.status.parse::<OrderStatus>() {
            Ok(status) => status,
            Err(_) => {
                return AdvanceOrderResponse::BadRequest(bad_request("order.invalid_status"));
            }
        };

        let params = AdvanceOrderParams {
            id: order_id,
            status,
            address: body.0.address.map(|address| address.into_props()),
        };

        match self.advance_use_case.execute(params).await {
            Ok(order) => AdvanceOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AdvanceOrderResponse::BadRequest(json),
                    404 => AdvanceOrderResponse::NotFound(json),
                    _ => AdvanceOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AdvanceOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
