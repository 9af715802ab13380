// ============================================================================
// Invoice Totals Example
// ============================================================================
//
// Run with: cargo run --example invoice_totals --features logging
// Set RUST_LOG=rupee_words=debug to see conversion events.

use rupee_words::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Invoice Totals ===\n");

    let converter = NumeralsToWords::default();
    let totals = ["0", "1", "99.50", "0.75", "1500", "1,00,000", "12345678", "2,49,999.99"];

    for raw in totals {
        match raw.parse::<Amount>() {
            Ok(amount) => {
                println!("Rs. {:>16}  {}", amount.to_indian_grouped(), converter.convert(amount));
            },
            Err(e) => println!("{:>20}  error: {}", raw, e),
        }
    }

    println!("\n=== Negative Amounts ===\n");

    for config in [ConverterConfig::rupees(), ConverterConfig::lenient()] {
        let policy = config.negative_policy;
        let converter = match NumeralsToWords::new(config) {
            Ok(converter) => converter,
            Err(e) => {
                println!("invalid configuration: {}", e);
                continue;
            },
        };
        match converter.convert_f64(-250.0) {
            Ok(words) => println!("{:?}: {}", policy, words),
            Err(e) => println!("{:?}: error: {}", policy, e),
        }
    }
}
