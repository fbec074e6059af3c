//! End-to-end flows through the public `OrderForm` API.

use std::sync::Arc;

use limitform::{
    AppConfig, BalanceSource, EventOutcome, Field, FormEvent, FormSettings, LimitSource, Market,
    MemoryOrderSink, OrderForm, OrderLimits, OrderSide, Precision, Range,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Account with a fixed amount of every asset
struct FlatBalances(Decimal);

impl BalanceSource for FlatBalances {
    fn available(&self, _asset: &str) -> Decimal {
        self.0
    }
}

struct WideLimits;

impl LimitSource for WideLimits {
    fn limits(&self) -> OrderLimits {
        OrderLimits {
            price: Range::new(dec!(0.01), dec!(1000000)),
            amount: Range::new(dec!(0.0001), dec!(1000)),
        }
    }
}

fn default_form() -> (OrderForm, Arc<MemoryOrderSink>) {
    let sink = Arc::new(MemoryOrderSink::new());
    let form = OrderForm::from_config(&AppConfig::default_config(), sink.clone());
    (form, sink)
}

fn apply_all(form: &mut OrderForm, events: &[&str]) -> Vec<EventOutcome> {
    events
        .iter()
        .map(|raw| form.apply(raw.parse::<FormEvent>().expect("valid event")))
        .collect()
}

#[test]
fn buy_order_from_price_and_amount() {
    let (mut form, sink) = default_form();
    apply_all(&mut form, &["price=88000", "amount=0.001"]);

    assert_eq!(form.text(Field::Total), "88.00");
    assert_eq!(form.state().slider, dec!(88));
    assert!(form.is_valid());

    let outcome = form.apply(FormEvent::Submit);
    let EventOutcome::Submitted(order) = outcome else {
        panic!("expected a submitted order, got {outcome:?}");
    };
    assert_eq!(order.side, OrderSide::Buy);
    assert_eq!(order.symbol, "BTC/USDT");
    assert_eq!(order.fee, dec!(0.000015));
    assert_eq!(order.receive, dec!(0.000985));
    assert_eq!(order.fee_asset, "BTC");
    assert_eq!(order.acknowledgement(), "Buy order submitted!");

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.orders()[0].client_order_id, order.client_order_id);
}

#[test]
fn amount_follows_total_and_price_changes() {
    let (mut form, _) = default_form();
    apply_all(&mut form, &["price=88000", "total=88"]);
    assert_eq!(form.text(Field::Amount), "0.001000");

    apply_all(&mut form, &["price=87600"]);
    assert_eq!(form.text(Field::Amount), "0.001000");
    assert_eq!(form.text(Field::Total), "87.60");
}

#[test]
fn keystrokes_are_gated() {
    let (mut form, _) = default_form();
    apply_all(&mut form, &["type:price=abc123", "type:amount=0.12345678"]);

    assert_eq!(form.text(Field::Price), "123");
    assert_eq!(form.text(Field::Amount), "0.123456");
    assert_eq!(
        form.apply("price=1e5".parse().unwrap()),
        EventOutcome::Rejected
    );
    assert_eq!(form.text(Field::Price), "123");
}

#[test]
fn insufficient_balance_blocks_submission_only() {
    let (mut form, sink) = default_form();
    apply_all(&mut form, &["price=88000", "total=150"]);

    let report = form.validation();
    assert!(report.field_error(Field::Total).is_none());
    assert_eq!(
        report.balance_error().map(|e| e.to_string()),
        Some("Insufficient balance (100 USDT)".to_string())
    );
    assert!(!form.is_valid());
    assert_eq!(form.apply(FormEvent::Submit), EventOutcome::NotSubmittable);
    assert!(sink.is_empty());

    // Editing stays possible and clears the error
    apply_all(&mut form, &["total=90"]);
    assert!(form.validation().is_empty());
    assert!(form.is_valid());
}

#[test]
fn sell_flow_with_slider() {
    let (mut form, sink) = default_form();
    let outcomes = apply_all(&mut form, &["price=88000", "side=sell", "slider=25", "submit"]);

    assert_eq!(form.text(Field::Price), "88000");
    assert_eq!(form.text(Field::Amount), "0.250000");
    assert_eq!(form.text(Field::Total), "22000.00");
    assert_eq!(form.spend_asset(), "BTC");

    let quote = form.fee_quote();
    assert_eq!(quote.fee_display(2), "330.00");
    assert_eq!(quote.receive_display(2), "21670.00");

    assert!(matches!(outcomes[3], EventOutcome::Submitted(ref o) if o.side == OrderSide::Sell));
    assert_eq!(sink.orders()[0].receive_asset, "USDT");
}

#[test]
fn switching_side_resets_dependent_fields() {
    let (mut form, _) = default_form();
    apply_all(&mut form, &["price=88000", "amount=0.1", "side=sell"]);

    assert_eq!(form.side(), OrderSide::Sell);
    assert_eq!(form.text(Field::Price), "88000");
    assert_eq!(form.text(Field::Amount), "");
    assert_eq!(form.text(Field::Total), "");
    assert_eq!(form.state().slider, Decimal::ZERO);
}

#[test]
fn custom_sources_drive_slider_and_limits() {
    let settings = FormSettings {
        market: Market::new("ETH", "USDC"),
        precision: Precision {
            price: 2,
            base: 4,
            quote: 2,
        },
        fee_rate: dec!(0.001),
    };
    let sink = Arc::new(MemoryOrderSink::new());
    let mut form = OrderForm::new(
        settings,
        Arc::new(FlatBalances(dec!(1000))),
        Arc::new(WideLimits),
        sink.clone(),
    );

    apply_all(&mut form, &["price=2500", "slider=100"]);
    assert_eq!(form.text(Field::Total), "1000.00");
    assert_eq!(form.text(Field::Amount), "0.4000");
    assert!(form.is_valid());

    apply_all(&mut form, &["submit"]);
    let order = &sink.orders()[0];
    assert_eq!(order.symbol, "ETH/USDC");
    assert_eq!(order.fee, dec!(0.0004));
}
