//! Storefront - scripted browsing session against the in-memory store

use anyhow::Result;
use chrono::Utc;
use storefront_core::domain::catalog::has_active_filters;
use storefront_core::services::MockPromotionSource;
use storefront_core::{
    Action, AppState, CartItem, Catalog, Config, FilterOptions, Notification, NotificationData, NotificationLog,
    NotificationType, ProductQuery, Quantity, SortKey, SortSpec, Store,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::sample(),
    };
    tracing::info!(products = catalog.len(), categories = ?catalog.categories(), "🛒 storefront ready");

    let store = Store::new(AppState { notifications: NotificationLog::seeded(Utc::now()), ..Default::default() });
    let mut events = store.subscribe();

    // Browse: vegetables in stock, cheapest first.
    let mut filters = FilterOptions { in_stock: true, ..Default::default() };
    filters.toggle_category("All");
    filters.toggle_category("Vegetables");
    let mut sort = SortSpec::default();
    sort.select(SortKey::Price);
    let query = ProductQuery::new().with_filters(filters).with_sort(sort);
    let results = catalog.query(&query);
    tracing::info!(
        results = results.len(),
        active_filters = has_active_filters(&query.search, &query.filters),
        "filtered catalog"
    );

    for product in &results {
        store.dispatch(Action::AddToCart(CartItem::from_product(product, Quantity::new(2)?)))?;
    }
    if let Some(rice) = catalog.products().iter().find(|p| p.category() == "Groceries") {
        store.dispatch(Action::AddToCart(CartItem::from_product(rice, Quantity::ONE)))?;
        store.dispatch(Action::ToggleFavorite(rice.clone()))?;
        store.dispatch(Action::UpdateQuantity { id: rice.id().clone(), quantity: 3 })?;
    }

    let source = MockPromotionSource::new(config.promotions_delay);
    store.load_promotions(&source).await;

    store.dispatch(Action::AddNotification(
        Notification::new(NotificationType::OrderStatus, "Order Placed", "We received your order")
            .with_data(NotificationData { order_id: Some("12346".into()), ..Default::default() }),
    ))?;
    store.dispatch(Action::MarkAllAsRead)?;

    while let Ok(event) = events.try_recv() {
        match event.message() {
            Some(message) => tracing::info!("{message}"),
            None => tracing::debug!(?event, "event"),
        }
    }

    let (subtotal, grand_total, items) = store.select(|s| {
        (s.cart.total(), s.cart.grand_total(config.delivery_fee), s.cart.item_count())
    });
    tracing::info!(
        items,
        subtotal = %config.format_price(subtotal),
        total = %config.format_price(grand_total),
        unread = store.select(|s| s.notifications.unread_count()),
        promotions = store.select(|s| s.promotions.active().len()),
        "session summary"
    );
    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    Ok(())
}
