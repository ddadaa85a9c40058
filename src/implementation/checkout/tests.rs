use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::*;
use crate::{
    errors::{NotificationError, StoreError, StoreResult},
    implementation::{
        notifications::{EmailSender, NotificationDispatcher, StatusEmail},
        order_management::{OrderFilter, OrderId, OrderStatus, StatusChange},
        persistence::{InMemoryOrderRepository, InMemorySettingsStore, OrderRepository},
        shipping::{StaticShippingSettings, StoredShippingSettings},
    },
    types::{LocationRef, ProductId, ShippingSettings, ShopConfig, StructuredAddress},
};

struct NullSender;

#[async_trait]
impl EmailSender for NullSender {
    async fn send(&self, _email: &StatusEmail) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Orders table that refuses every write.
struct ReadOnlyRepository;

#[async_trait]
impl OrderRepository for ReadOnlyRepository {
    async fn insert(&self, _order: &Order) -> StoreResult<()> {
        Err(StoreError::Rejected("permission denied for table orders".to_string()))
    }

    async fn find(&self, _id: &OrderId) -> StoreResult<Option<Order>> {
        Ok(None)
    }

    async fn update_status(&self, _id: &OrderId, _change: &StatusChange) -> StoreResult<Option<Order>> {
        Err(StoreError::Rejected("permission denied for table orders".to_string()))
    }

    async fn list(&self, _filter: &OrderFilter) -> StoreResult<Vec<Order>> {
        Ok(Vec::new())
    }
}

fn checkout_with(orders: Arc<dyn OrderRepository>) -> CheckoutService {
    let pricing = CheckoutPricing::new(Arc::new(StaticShippingSettings(ShippingSettings::default())));
    let orders = OrderService::new(orders, NotificationDispatcher::new(Arc::new(NullSender)));
    CheckoutService::new(pricing, orders)
}

fn lupi_address() -> Address {
    Address::Structured(StructuredAddress {
        street:      "Rizal St.".to_string(),
        barangay:    LocationRef::new("Poblacion", "051720015"),
        city:        LocationRef::new("Lupi", "051720000"),
        province:    LocationRef::new("Camarines Sur", "0517"),
        region:      LocationRef::new("Bicol Region", "05"),
        postal_code: "4409".to_string(),
    })
}

fn request(address: Address, items: Vec<LineItem>) -> CheckoutRequest {
    CheckoutRequest {
        customer_id: OrderCustomerId::new("cust-1"),
        customer_email: " ana@example.com ".to_string(),
        customer_name: "Ana Reyes".to_string(),
        address,
        items,
        payment_method: PaymentMethod::CashOnDelivery,
        customer_note: Some("   ".to_string()),
    }
}

fn sofa() -> LineItem {
    LineItem::new(ProductId::from_static("sofa-l"), "L-Shaped Sofa", dec!(2500), 2).unwrap()
}

fn side_table() -> LineItem {
    LineItem::new(ProductId::from_static("table-side"), "Side Table", dec!(1200), 1).unwrap()
}

#[tokio::test]
async fn test_free_shipping_area_order() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let checkout = checkout_with(repository.clone());

    let order = checkout.place_order(request(lupi_address(), vec![sofa()])).await.unwrap();

    assert_eq!(order.municipality.as_str(), "Lupi");
    assert_eq!(order.totals.subtotal, dec!(5000));
    assert_eq!(order.totals.discount, dec!(0));
    assert_eq!(order.totals.shipping_fee, dec!(0));
    assert_eq!(order.totals.grand_total, dec!(5000));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.customer_email, "ana@example.com");
    assert_eq!(order.customer_note, None);
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_other_area_order_pays_standard_fee() {
    let checkout = checkout_with(Arc::new(InMemoryOrderRepository::new()));
    let address = Address::free_text("123 Unknown Road, Somewhere Far");

    let order = checkout.place_order(request(address, vec![side_table()])).await.unwrap();

    assert!(order.municipality.is_other());
    assert_eq!(order.totals.subtotal, dec!(1200));
    assert_eq!(order.totals.shipping_fee, dec!(500));
    assert_eq!(order.totals.grand_total, dec!(1700));
}

#[tokio::test]
async fn test_quote_matches_placed_order() {
    let checkout = checkout_with(Arc::new(InMemoryOrderRepository::new()));
    let items = vec![sofa(), side_table().with_discount(dec!(25)).unwrap()];
    let address = Address::free_text("Barangay San Jose, Naga City");

    let quote = checkout.quote(&items, &address).await.unwrap();
    let again = checkout.quote(&items, &address).await.unwrap();
    assert_eq!(quote, again);
    assert_eq!(quote.shipping.municipality.as_str(), "Naga City");
    assert!(!quote.shipping.free_shipping);

    let order = checkout.place_order(request(address, items)).await.unwrap();
    assert_eq!(order.totals, quote.totals);
    assert_eq!(order.totals.discount, dec!(300));
    assert_eq!(order.totals.grand_total, dec!(6400));
}

#[tokio::test]
async fn test_empty_cart_is_rejected() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let checkout = checkout_with(repository.clone());

    let result = checkout.place_order(request(lupi_address(), Vec::new())).await;
    assert!(matches!(result, Err(CommerceError::CartEmpty)));
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_malformed_item_is_rejected() {
    let checkout = checkout_with(Arc::new(InMemoryOrderRepository::new()));
    let mut broken = sofa();
    broken.quantity = 0;

    let result = checkout.place_order(request(lupi_address(), vec![broken])).await;
    assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
}

#[tokio::test]
async fn test_missing_email_is_rejected() {
    let checkout = checkout_with(Arc::new(InMemoryOrderRepository::new()));
    let mut req = request(lupi_address(), vec![sofa()]);
    req.customer_email = "  ".to_string();

    assert!(matches!(
        checkout.place_order(req).await,
        Err(CommerceError::ValidationError(_))
    ));
}

#[tokio::test]
async fn test_oversized_price_is_rejected_not_panicking() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let checkout = checkout_with(repository.clone());
    let json = serde_json::json!({
        "customerId": "cust-2",
        "customerEmail": "big@example.com",
        "customerName": "Big Spender",
        "address": { "kind": "free_text", "value": "Lupi, Camarines Sur" },
        "items": [
            { "productId": "throne", "name": "Throne", "unitPrice": "79228162514264337593543950335", "quantity": 2 }
        ],
        "paymentMethod": "cash_on_delivery"
    });
    let req: CheckoutRequest = serde_json::from_value(json).unwrap();

    assert!(matches!(req.validate(), Err(CommerceError::AmountOverflow(_))));
    let err = checkout.place_order(req).await.unwrap_err();
    assert!(matches!(err, CommerceError::AmountOverflow(_)));
    assert_eq!(err.user_message(), "Some items in your cart are invalid. Please review your cart.");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_cart_total_overflow_is_rejected() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let checkout = checkout_with(repository.clone());
    let half = rust_decimal::Decimal::MAX / dec!(2) + dec!(1);
    let items = vec![
        LineItem::new(ProductId::from_static("a"), "Wardrobe", half, 1).unwrap(),
        LineItem::new(ProductId::from_static("b"), "Wardrobe", half, 1).unwrap(),
    ];

    assert!(matches!(
        checkout.quote(&items, &lupi_address()).await,
        Err(CommerceError::AmountOverflow("subtotal"))
    ));
    let result = checkout.place_order(request(lupi_address(), items)).await;
    assert!(matches!(result, Err(CommerceError::AmountOverflow("subtotal"))));
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_persistence_failure_is_order_creation_failure() {
    let checkout = checkout_with(Arc::new(ReadOnlyRepository));

    let err = checkout.place_order(request(lupi_address(), vec![sofa()])).await.unwrap_err();

    assert!(matches!(err, CommerceError::OrderCreationFailed(StoreError::Rejected(_))));
    assert_eq!(err.user_message(), "We couldn't place your order. Please try again in a moment.");
}

#[tokio::test]
async fn test_settings_change_applies_to_next_checkout() {
    let store = Arc::new(InMemorySettingsStore::new());
    let settings = Arc::new(StoredShippingSettings::new(store, &ShopConfig::default()));
    let pricing = CheckoutPricing::new(settings.clone());
    let orders = OrderService::new(
        Arc::new(InMemoryOrderRepository::new()),
        NotificationDispatcher::disabled(),
    );
    let checkout = CheckoutService::new(pricing, orders);
    let address = Address::free_text("Poblacion, Pili, Camarines Sur");

    let before = checkout.quote(&[side_table()], &address).await.unwrap();
    assert_eq!(before.totals.grand_total, dec!(1700));

    settings.replace(ShippingSettings::new(["Pili"], dec!(750))).await.unwrap();

    let after = checkout.quote(&[side_table()], &address).await.unwrap();
    assert_eq!(after.shipping.fee, dec!(0));
    assert_eq!(after.totals.grand_total, dec!(1200));

    let elsewhere = checkout.quote(&[side_table()], &lupi_address()).await.unwrap();
    assert_eq!(elsewhere.shipping.fee, dec!(750));
}

#[test]
fn test_request_wire_shape() {
    let json = serde_json::json!({
        "customerId": "cust-9",
        "customerEmail": "leo@example.com",
        "customerName": "Leo Cruz",
        "address": { "kind": "free_text", "value": "Ragay, Camarines Sur" },
        "items": [
            { "productId": "shelf", "name": "Bookshelf", "unitPrice": "3000", "quantity": 1 }
        ],
        "paymentMethod": "online_payment"
    });

    let req: CheckoutRequest = serde_json::from_value(json).unwrap();
    assert_eq!(req.payment_method, PaymentMethod::OnlinePayment);
    assert_eq!(req.items[0].unit_price, dec!(3000));
    assert!(req.customer_note.is_none());
    assert!(req.validate().is_ok());
}
