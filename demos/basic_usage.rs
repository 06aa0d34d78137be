//! Basic usage example for placefinder-rs
//!
//! This example demonstrates how to:
//! - Load the embedded candidate catalog
//! - Drive the city/area autocomplete with keystrokes and keys
//! - Turn the selected values into a search request
//! - Render a backend reply into place cards

use placefinder_rs::prelude::*;

fn print_dropdown(label: &str, view: &DropdownView) {
    if !view.open {
        println!("  [{label}] (closed)");
        return;
    }
    if let Some(text) = view.placeholder_text() {
        println!("  [{label}] {text}");
    }
    for item in &view.items {
        let marker = if item.highlighted { ">" } else { " " };
        println!("  [{label}] {marker} {}", item.value);
    }
}

fn main() -> Result<()> {
    println!("=== Place Finder Basic Usage Example ===\n");

    let catalog = Catalog::load()?;
    let stats = catalog.stats();
    println!(
        "Catalog: {} cities, {} with areas, {} areas, {} place types\n",
        stats.cities, stats.cities_with_areas, stats.areas, stats.place_types
    );

    let mut ac = AutocompleteController::new(catalog);

    // Example 1: typing into the city field
    println!("--- Example 1: Typing 'h' into the city field ---");
    let view = ac.on_query_changed(Field::City, "h");
    print_dropdown("city", &view.city.dropdown);
    println!();

    // Example 2: keyboard selection
    println!("--- Example 2: ArrowDown + Enter ---");
    let fx = ac.on_key_navigate(Field::City, NavKey::ArrowDown);
    print_dropdown("city", &fx.view.city.dropdown);
    let fx = ac.on_key_navigate(Field::City, NavKey::Enter);
    println!("  city = {:?}, area hint = {:?}", fx.view.city.value, fx.view.area.hint);
    println!();

    // Example 3: area suggestions follow the chosen city
    println!("--- Example 3: Area suggestions for 'j' ---");
    let view = ac.on_query_changed(Field::Area, "j");
    print_dropdown("area", &view.area.dropdown);
    let fx = ac.on_select(Field::Area, "Jubilee Hills");
    println!("  area = {:?}", fx.view.area.value);
    println!();

    // Example 4: request body and a canned reply
    println!("--- Example 4: Search request and result cards ---");
    let request = ac.form("cafe").validate()?;
    println!("  POST /search {}", serde_json::to_string(&request)?);

    let reply: SearchResponse = serde_json::from_str(
        r#"{"places":[{"name":"Roastery Coffee House","address":"Road No. 14, Banjara Hills","phone":"040 1234 5678"}]}"#,
    )?;
    let outcome = SearchOutcome::from_response(reply);
    for card in PlaceCard::from_places(outcome.places(), &request.place_type) {
        println!("  {} [{}]", card.name, card.place_type);
        println!("    {}", card.address);
        println!("    {}", card.maps_url);
        if let Some(tel) = &card.phone_url {
            println!("    {tel}");
        }
    }

    Ok(())
}
