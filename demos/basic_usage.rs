// ============================================================================
// Basic Usage Example
// ============================================================================

use kos_numerals::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== k.os Numeral Converter ===\n");

    // The alphabet
    println!("Glyphs:");
    for (digit, glyph) in Alphabet::kos().iter() {
        println!("  {} -> {}", digit, glyph);
    }

    // Direct codec use
    let codec = NumeralCodec::new();
    println!("\nEncoding decimals...");
    for text in ["0", "8", "300", "18446744073709551616"] {
        match codec.encode(text) {
            Ok(numeral) => println!("  {} => {}", text, numeral),
            Err(err) => println!("  {} => error: {}", text, err),
        }
    }

    println!("\nDecoding numerals...");
    for text in ["<X<", "|0", "Z", ""] {
        match codec.decode(text) {
            Ok(value) => println!("  {:?} => {}", text, value),
            Err(err) => println!("  {:?} => error: {}", text, err),
        }
    }

    // Session as a view layer would drive it
    let session = ConverterSessionBuilder::web_widget()
        .build(Arc::new(LoggingObserver))
        .expect("preset configuration is valid");

    println!("\nSession starts in {} mode", session.direction());
    for keystrokes in ["<", "<X", "<X<"] {
        let _ = session.convert(keystrokes);
        println!("  input {:?} shows {:?}", keystrokes, session.last_output());
    }

    session.toggle_direction();
    println!("\nSwitched to {} mode", session.direction());
    let _ = session.convert("-5");
    println!("  input \"-5\" shows {:?}", session.last_output());

    println!("\nConversions performed: {}", session.conversions_performed());
}
