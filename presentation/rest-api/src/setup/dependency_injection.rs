use std::sync::Arc;

use logger::TracingLogger;
use persistence::invoice::repository::InvoiceRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::invoice::get_all::ListInvoicesUseCaseImpl;
use business::application::invoice::get_by_order::GetInvoiceByOrderUseCaseImpl;
use business::application::order::add_item::AddCartItemUseCaseImpl;
use business::application::order::advance::AdvanceOrderUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::ListOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::get_cart::GetCartUseCaseImpl;
use business::application::order::list_cart_items::ListCartItemsUseCaseImpl;
use business::application::order::remove_item::RemoveCartItemUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::rate::RateProductUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub order_api: crate::api::order::routes::OrderApi,
    pub invoice_api: crate::api::invoice::routes::InvoiceApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let invoice_repository = Arc::new(InvoiceRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Order use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let list_cart_items_use_case = Arc::new(ListCartItemsUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let list_orders_use_case = Arc::new(ListOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let advance_order_use_case = Arc::new(AdvanceOrderUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Invoice use cases
        let get_invoice_by_order_use_case = Arc::new(GetInvoiceByOrderUseCaseImpl {
            repository: invoice_repository.clone(),
            logger: logger.clone(),
        });
        let list_invoices_use_case = Arc::new(ListInvoicesUseCaseImpl {
            repository: invoice_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let rate_product_use_case = Arc::new(RateProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let order_api = crate::api::order::routes::OrderApi::new(
            get_cart_use_case,
            list_cart_items_use_case,
            add_item_use_case,
            remove_item_use_case,
            get_order_by_id_use_case,
            list_orders_use_case,
            create_order_use_case,
            advance_order_use_case,
        );

        let invoice_api = crate::api::invoice::routes::InvoiceApi::new(
            get_invoice_by_order_use_case,
            list_invoices_use_case,
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_product_by_id_use_case,
            rate_product_use_case,
        );

        Self {
            health_api,
            order_api,
            invoice_api,
            product_api,
        }
    }
}
