//! Prints what the deck and vector types do.
//!
//! Flip `RUN_CARD_DEMO` to switch between the two routines. Set
//! `RUST_LOG=trace` to see the library's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use fluentdeck::{Card, Deck, Slice, Vector2D};

const RUN_CARD_DEMO: bool = false;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    if RUN_CARD_DEMO {
        card_demo()?;
    } else {
        vector_demo();
    }
    Ok(())
}

fn card_demo() -> Result<(), Box<dyn Error>> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let deck = Deck::new(seed);

    println!("{}", deck.len());
    println!("{:?}", deck.at(0)?);
    println!("{:?}", deck.at(-1)?);
    println!("{:?}", deck.slice(Slice::range(0, 10)));
    println!("{:?}", deck.slice(Slice::range(0, 10).with_step(2)?));
    println!("{:?}", deck.sample_random_n(3));

    for card in &deck {
        println!("{card:?}");
    }

    println!("{}", deck.contains(&Card::new("Q", "hearts")));
    println!("{}", deck.contains(&Card::new("Q", "beasts")));

    for card in deck.sorted_by_spades_high()? {
        println!("{card:?}");
    }
    Ok(())
}

fn vector_demo() {
    let v1 = Vector2D::new(2, 4);
    let v2 = Vector2D::new(2, 1);
    let v3 = Vector2D::<i32>::default();

    println!("{v1}");
    println!("{}", v1 + v2);
    println!("{}", v1.magnitude());
    println!("{}", v1.is_truthy());
    println!("{}", v3.is_truthy());
    println!("{}", v2 * 8);
}
