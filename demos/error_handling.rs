//! Error handling example for placefinder-rs
//!
//! This example demonstrates the two error categories of the search form
//! and the non-error states of the autocomplete.

use placefinder_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Place Finder Error Handling Example ===\n");

    // Example 1: catalog loading
    println!("--- Example 1: Loading a catalog from a missing file ---");
    match Catalog::load_from_path("does/not/exist.json.gz") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: unmatched queries are not errors
    println!("--- Example 2: Unknown city, any area query ---");
    let mut ac = AutocompleteController::new(Catalog::load()?);
    ac.on_query_changed(Field::City, "unknown city");
    let view = ac.on_query_changed(Field::Area, "k");
    println!(
        "  open = {}, placeholder = {:?}",
        view.area.dropdown.open,
        view.area.dropdown.placeholder_text()
    );
    println!();

    // Example 3: validation
    println!("--- Example 3: Submitting with a blank area ---");
    match SearchForm::new("Pune", "   ", "gym").validate() {
        Ok(req) => println!("  request: {req:?}"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 4: request failures
    println!("--- Example 4: Searching against an unreachable backend ---");
    let client = HttpClient::new(ClientConfig::new("http://127.0.0.1:9"))?;
    let mut session = SearchSession::new();
    let outcome = session.run(&client, &SearchForm::new("Pune", "Baner", "gym"))?;
    println!("  {}", outcome.message().unwrap_or("(results)"));
    println!("  trigger enabled again: {}", !session.is_busy());

    Ok(())
}
