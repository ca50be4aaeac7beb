//! End-to-end storefront scenarios: browse, fill the cart, check out.

use verdant_commerce::prelude::*;

fn filled_form() -> CheckoutForm {
    let values = [
        (FormField::FirstName, "Grace"),
        (FormField::LastName, "Hopper"),
        (FormField::Email, "grace@example.com"),
        (FormField::Address, "1 Greenhouse Row"),
        (FormField::City, "Arlington"),
        (FormField::State, "VA"),
        (FormField::Zip, "22201"),
        (FormField::CardNumber, "4000 0000 0000 0002"),
        (FormField::Expiry, "01/30"),
        (FormField::Cvc, "999"),
    ];
    values
        .into_iter()
        .fold(CheckoutForm::new(), |form, (field, value)| form.with(field, value))
}

fn product<'a>(catalog: &'a Catalog, id: &str) -> &'a Product {
    catalog.require(&ProductId::new(id)).unwrap()
}

#[test]
fn aloe_vera_pair_totals_fifty() {
    let catalog = Catalog::plant_shop();
    let mut cart = CartStore::new();
    cart.add_item(product(&catalog, "5"), 2).unwrap();

    assert_eq!(cart.cart_total(), Money::usd(5000));
}

#[test]
fn monstera_and_snake_plant_display_as_seventy_five() {
    let catalog = Catalog::plant_shop();
    let mut cart = CartStore::new();
    cart.add_item(product(&catalog, "1"), 1).unwrap();
    cart.add_item(product(&catalog, "2"), 1).unwrap();

    assert_eq!(cart.cart_total().display(), "$75.00");
}

#[test]
fn empty_checkout_offers_only_the_way_back() {
    let session = ShopSession::new();

    assert_eq!(session.checkout_state(), CheckoutState::Empty);
    match session.checkout_view() {
        CheckoutView::EmptyCart { destination, .. } => {
            assert_eq!(destination, Destination::Shop);
            assert_eq!(destination.path(), "/shop");
            assert_eq!(destination.link_label(), "Return to Shop");
        }
        other => panic!("expected the empty-cart view, got {:?}", other),
    }
}

#[test]
fn every_missing_field_blocks_submission() {
    let catalog = Catalog::plant_shop();
    for field in FormField::ALL {
        let mut session = ShopSession::new();
        session.add_to_cart(product(&catalog, "7"), 1).unwrap();

        let result = session.place_order(&filled_form().with(field, ""));

        match result {
            Err(CommerceError::CheckoutIncomplete(report)) => {
                assert_eq!(report.missing, vec![field]);
            }
            other => panic!("{} left blank should block checkout, got {:?}", field, other),
        }
        assert_eq!(session.checkout_state(), CheckoutState::Filling);
    }
}

#[test]
fn full_purchase_reaches_confirmation() {
    let catalog = Catalog::plant_shop();
    let mut session =
        ShopSession::with_settings(Currency::USD, OrderNumberScheme::Sequential, 4200);

    session.add_to_cart(product(&catalog, "10"), 1).unwrap();
    session.add_to_cart(product(&catalog, "9"), 2).unwrap();
    session.add_to_cart(product(&catalog, "10"), 1).unwrap();
    assert_eq!(session.cart().unique_item_count(), 2);
    assert!(session.cart_mut().remove_one(&ProductId::new("9")));

    let expected_total = session.cart().cart_total();
    assert_eq!(expected_total, Money::usd(2 * 6500 + 1800));

    let order = session.place_order(&filled_form()).unwrap();

    assert_eq!(order.number.to_string(), "#4200");
    assert_eq!(order.total, expected_total);
    assert_eq!(order.item_count(), 3);
    assert!(session.cart().is_empty());
    match session.checkout_view() {
        CheckoutView::Confirmation {
            order: shown,
            destination,
            ..
        } => {
            assert_eq!(shown.number, order.number);
            assert_eq!(destination, Destination::Home);
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
}

#[test]
fn filtered_catalog_feeds_the_cart() {
    let catalog = Catalog::plant_shop();
    let succulents = catalog.filter(&[Filter::Category(Category::Succulent)]);
    assert_eq!(succulents.len(), 1);

    let mut cart = CartStore::new();
    for p in &succulents {
        cart.add_item(p, 3).unwrap();
    }
    assert_eq!(cart.cart_total().display(), "$75.00");
}
