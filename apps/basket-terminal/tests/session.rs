//! Scripted sessions against the default seed basket.

use basket_core::Money;
use basket_terminal::checkout::PreviewSubmitter;
use basket_terminal::session::Session;
use basket_terminal::state::ConfigState;

fn run_script(script: &str) -> (Session<PreviewSubmitter>, String) {
    let config = ConfigState::default();
    let cart = config.build_store().expect("default seed is valid");
    let mut session = Session::new(cart, config, PreviewSubmitter::new());

    let mut output = Vec::new();
    session
        .run(script.as_bytes(), &mut output)
        .expect("session runs to completion");

    (session, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_initial_page_shows_seed_totals() {
    let (_, output) = run_script("quit\n");
    assert!(output.contains("Your Basket"));
    assert!(output.contains("£11.96"));
    assert!(output.contains("£2.39"));
    assert!(output.contains("£14.35"));
}

#[test]
fn test_increment_then_remove() {
    let (session, output) = run_script("+ 3\nrm 1\nquit\n");
    let cart = session.cart();

    assert_eq!(cart.len(), 2);
    assert!(cart.get("Cotton T-Shirt, Medium").is_none());
    // 2.99 × 2 + 3.99 × 2
    assert_eq!(cart.subtotal(), Money::from_pence(1396));
    assert!(output.contains("£13.96"));
}

#[test]
fn test_invalid_quantity_leaves_cart_unchanged() {
    let (session, output) = run_script("set 2 11\nset 2 abc\nquit\n");
    assert_eq!(
        session.cart().get("Baseball Cap, One Size").unwrap().quantity.get(),
        2
    );
    assert!(output.contains("! Quantity must be a whole number from 1 to 10"));
}

#[test]
fn test_cleared_field_reverts_on_blur() {
    let (session, output) = run_script("clear 2\nblur 2\nquit\n");
    let cart = session.cart();

    assert_eq!(cart.pending_edit(), None);
    assert_eq!(cart.get("Baseball Cap, One Size").unwrap().quantity.get(), 2);
    assert!(output.contains("[  ]  + -"));
    assert_eq!(cart.subtotal(), Money::from_pence(1196));
}

#[test]
fn test_bad_commands_are_reported_and_ignored() {
    let (session, output) = run_script("dance\nrm 9\n+ x\nquit\n");
    assert_eq!(session.cart().len(), 3);
    assert!(output.contains("! Unknown command: dance"));
    assert!(output.contains("! Row not found: 9"));
    assert!(output.contains("! Not a row number: x"));
}

#[test]
fn test_buy_prints_payload_and_keeps_cart() {
    let (session, output) = run_script("buy\n");
    assert!(output.contains("Order preview (not sent):"));
    assert!(output.contains("\"cart\""));
    assert!(output.contains("\"subtotal\": 11.96"));
    assert!(output.contains("Reference: "));
    assert_eq!(session.cart().len(), 3);
    assert_eq!(session.submitter().receipts().len(), 1);
}

#[test]
fn test_buy_with_empty_basket_is_rejected() {
    let (session, output) = run_script("rm 1\nrm 1\nrm 1\nbuy\n");
    assert!(session.cart().is_empty());
    assert!(output.contains("Your basket is empty."));
    assert!(output.contains("! Your basket is empty"));
    assert!(session.submitter().receipts().is_empty());
}

#[test]
fn test_end_of_input_ends_session() {
    let (session, _) = run_script("+ 1\n");
    assert_eq!(
        session.cart().get("Cotton T-Shirt, Medium").unwrap().quantity.get(),
        2
    );
}

#[test]
fn test_buy_with_cleared_field_sends_committed_quantity() {
    let (session, output) = run_script("clear 2\nbuy\nshow\nquit\n");
    assert_eq!(session.cart().pending_edit(), None);

    let (before_buy, after_buy) = output
        .split_once("Order preview (not sent):")
        .expect("checkout preview printed");
    assert!(before_buy.contains("[  ]  + -"));
    assert!(after_buy.contains("\"quantity\": 2"));
    assert!(after_buy.contains("[ 2]  + -"));
    assert!(!after_buy.contains("[  ]  + -"));
}
