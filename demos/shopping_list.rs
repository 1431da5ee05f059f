//! Replays a shopping-list session against both containers and prints the result.
//!
//! Run with `cargo run -p linear-collections --example shopping_list`.

use linear_collections::{ArrayList, IndexError, LinkedList};
use tracing::Level;

fn array_list_session() -> Result<(), IndexError> {
    let mut shopping = ArrayList::new();
    shopping.add("Milk".to_string());
    shopping.add("Honey".to_string());
    shopping.add("Olives".to_string());
    shopping.add("Water".to_string());
    shopping.add("Beer".to_string());
    shopping.remove("Olives");
    shopping.insert(1, "Fruits".to_string())?;
    shopping.insert(0, "Cheese".to_string())?;
    shopping.insert(6, "Vegetables".to_string())?;
    shopping.remove_at(0)?;
    let fourth = format!("A lot of {}", shopping.get(3)?);
    shopping.set(3, fourth)?;

    println!("We need to buy:");
    for item in &shopping {
        println!(" - {item}");
    }
    println!("Position of 'Beer' = {:?}", shopping.index_of("Beer"));
    println!("Position of 'Water' = {:?}", shopping.index_of("Water"));
    println!("Do we have to buy Bread? {}", shopping.contains("Bread"));

    Ok(())
}

fn linked_list_session() -> Result<(), IndexError> {
    let absent: Option<String> = None;
    let mut shopping: LinkedList<Option<String>> = LinkedList::new();
    shopping.add(Some("Milk".to_string()));
    shopping.remove(&Some("Milk".to_string()));
    shopping.add(Some("Honey".to_string()));
    shopping.add(Some("Olives".to_string()));
    shopping.add(Some("Water".to_string()));
    if let Some(third) = shopping.get_mut(2)? {
        third.insert_str(0, "A lot of ");
    }
    shopping.add(Some("Fruits".to_string()));
    shopping.remove_at(0)?;
    shopping.remove_at(2)?;
    shopping.add(absent.clone());
    shopping.add(Some("Beer".to_string()));
    shopping.remove(&absent);

    println!("We need to buy:");
    for item in shopping.iter().flatten() {
        println!(" - {item}");
    }
    println!(
        "Position of 'Beer' = {:?}",
        shopping.index_of(&Some("Beer".to_string()))
    );
    println!(
        "Position of 'Water' = {:?}",
        shopping.index_of(&Some("Water".to_string()))
    );
    println!(
        "Do we have to buy Bread? {}",
        shopping.contains(&Some("Bread".to_string()))
    );

    Ok(())
}

fn main() -> Result<(), IndexError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    array_list_session()?;
    println!();
    linked_list_session()
}
