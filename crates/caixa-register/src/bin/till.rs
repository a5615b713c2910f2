//! Terminal reference adapter for the counter till.
//!
//! This binary is deliberately thin plumbing: it reads operator commands
//! from stdin, calls into [`caixa_register`], and renders the snapshots and
//! records that come back. Every invariant lives below it.
//!
//! ## Session Example
//! ```text
//! caixa> customer Maria
//! caixa> add 1 2
//! caixa> add 2
//! caixa> pay cash
//! caixa> tender 20
//! caixa> show
//!   Cliente: Maria
//!    1. Arroz 5kg            x2   R$ 5,00     R$ 10,00
//!    2. Feijão 1kg           x1   R$ 3,50     R$ 3,50
//!   Total:    R$ 13,50
//!   Troco:    R$ 6,50
//! caixa> finalize
//! ```
//!
//! Run with `RUST_LOG=debug` to watch the till's structured log.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use caixa_core::{ChangeDue, CoreError, Money, PaymentMethod};
use caixa_register::{CancelOutcome, TillSnapshot, TillState};

/// The counter's configured product buttons: name and unit price in
/// centavos. Fixed at build time, exactly like the buttons on the screen.
const PRODUCTS: &[(&str, i64)] = &[
    ("Arroz 5kg", 500),
    ("Feijão 1kg", 350),
    ("Leite 1L", 425),
    ("Café 500g", 1290),
    ("Pão francês", 80),
];

fn main() {
    init_tracing();

    let state = TillState::new();

    println!("Caixa POS — terminal till. Type 'help' for commands.");
    print_prompt();

    // One read_line per iteration; the confirmation prompt inside `cancel`
    // reads stdin too, so no lock may be held across the dispatch
    loop {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(c) => c,
            None => {
                print_prompt();
                continue;
            }
        };
        // Everything after the command word, original spacing collapsed
        let rest = parts.collect::<Vec<_>>().join(" ");

        match command {
            "help" => print_help(),
            "products" => print_products(),
            "customer" => match state.with_till_mut(|t| t.call_customer(&rest)) {
                Ok(snapshot) => render(&snapshot),
                Err(err) => print_error(&err),
            },
            "add" => add_item(&state, &rest),
            "rm" => remove_item(&state, &rest),
            "pay" => select_payment(&state, &rest),
            "tender" => set_tendered(&state, &rest),
            "show" => render(&state.with_till(|t| t.snapshot())),
            "json" => {
                let snapshot = state.with_till(|t| t.snapshot());
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("! snapshot serialization failed: {err}"),
                }
            }
            "finalize" => finalize(&state),
            "cancel" => cancel(&state),
            "quit" | "exit" => break,
            other => println!("! unknown command '{other}', try 'help'"),
        }
        print_prompt();
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default: WARN only, so the operator screen stays clean; override with
/// `RUST_LOG=debug` to watch every till operation.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_prompt() {
    print!("caixa> ");
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("  customer <name>        call a customer to the counter");
    println!("  products               list the product buttons");
    println!("  add <n> [qty]          add product n (see 'products'), default qty 1");
    println!("  rm <row>               remove a cart row by its displayed number");
    println!("  pay <cash|card|pix>    select the payment method");
    println!("  tender <amount>        cash handed over, e.g. 20 or 13,50");
    println!("  show / json            render the till as text / JSON");
    println!("  finalize               commit the sale");
    println!("  cancel                 abandon the sale (asks for confirmation)");
    println!("  quit                   leave");
}

fn print_products() {
    for (i, (name, centavos)) in PRODUCTS.iter().enumerate() {
        println!("  {}. {:<20} {}", i + 1, name, Money::from_centavos(*centavos));
    }
}

fn print_error(err: &CoreError) {
    println!("! {err}");
}

fn add_item(state: &TillState, args: &str) {
    let mut parts = args.split_whitespace();
    let product: usize = match parts.next().map(|raw| raw.parse::<usize>()) {
        Some(Ok(n)) if (1..=PRODUCTS.len()).contains(&n) => n,
        _ => {
            println!("! add takes a product number 1-{}", PRODUCTS.len());
            return;
        }
    };
    let quantity: i64 = match parts.next() {
        None => 1,
        Some(raw) => match raw.parse() {
            Ok(q) => q,
            Err(_) => {
                println!("! quantity must be a whole number");
                return;
            }
        },
    };

    let (name, centavos) = PRODUCTS[product - 1];
    match state.with_till_mut(|t| t.add_item(name, Money::from_centavos(centavos), quantity)) {
        Ok(snapshot) => render(&snapshot),
        Err(err) => print_error(&err),
    }
}

fn remove_item(state: &TillState, args: &str) {
    let row: usize = match args.trim().parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            println!("! rm takes the displayed row number");
            return;
        }
    };
    // Displayed rows are 1-based
    render(&state.with_till_mut(|t| t.remove_item(row - 1)));
}

fn select_payment(state: &TillState, args: &str) {
    let method = match args.trim().to_lowercase().as_str() {
        "cash" | "dinheiro" => PaymentMethod::Cash,
        "card" | "cartao" | "cartão" => PaymentMethod::Card,
        "pix" => PaymentMethod::Pix,
        _ => {
            println!("! pay takes cash, card, or pix");
            return;
        }
    };
    render(&state.with_till_mut(|t| t.select_payment(method)));
}

fn set_tendered(state: &TillState, args: &str) {
    match args.parse::<Money>() {
        Ok(amount) => render(&state.with_till_mut(|t| t.set_tendered(amount))),
        Err(err) => println!("! {err}"),
    }
}

fn finalize(state: &TillState) {
    match state.with_till_mut(|t| t.finalize()) {
        Ok(sale) => {
            println!("Venda finalizada!");
            println!("  Cliente: {}", sale.customer);
            println!("  Total:   {}", sale.total);
            println!("  Forma:   {}", sale.payment_method);
            if let ChangeDue::Change(change) = sale.change {
                if change.is_positive() {
                    println!("  Troco:   {change}");
                }
            }
        }
        Err(err) => print_error(&err),
    }
}

fn cancel(state: &TillState) {
    let outcome = state.with_till_mut(|t| t.cancel(confirm_cancel));
    match outcome {
        CancelOutcome::NothingToCancel => {}
        CancelOutcome::Declined => println!("Cancel declined, sale kept."),
        CancelOutcome::Cancelled => render(&state.with_till(|t| t.snapshot())),
    }
}

/// Relays the yes/no confirmation to the operator.
fn confirm_cancel() -> bool {
    print!("Deseja realmente cancelar esta compra? [s/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes")
}

/// Renders a snapshot the way the cart table and payment panel would.
fn render(snapshot: &TillSnapshot) {
    match &snapshot.customer {
        Some(customer) => println!("  Cliente: {customer}"),
        None => println!("  Cliente: Nenhum"),
    }

    if snapshot.items.is_empty() {
        println!("  (carrinho vazio)");
    } else {
        for (i, row) in snapshot.items.iter().enumerate() {
            println!(
                "  {:>2}. {:<20} x{:<4} {:<10} {}",
                i + 1,
                row.name,
                row.quantity,
                row.unit_price.to_string(),
                row.line_total
            );
        }
    }

    println!("  Total:    {}", snapshot.total);
    if let Some(method) = snapshot.payment_method {
        println!("  Forma:    {method}");
    }
    println!("  Troco:    {}", snapshot.change);
}
