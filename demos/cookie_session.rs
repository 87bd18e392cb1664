use cookiekv::cookies::cookierecord::{CookieRecord, Expiry};
use cookiekv::cookies::memory::MemoryCookieJar;
use cookiekv::cookies::store::CookieStore;
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    let jar = Arc::new(MemoryCookieJar::new(
        "https://example.com/app/settings/profile".parse()?,
    ));
    let store = CookieStore::for_jar(jar.clone());

    println!("--- Step 1: Setting cookies at several paths ---");
    store.set(
        &CookieRecord::new("session", "abc123")
            .path("/app")
            .expiry(Expiry::RelativeSeconds(3600)),
    );
    store.set(&CookieRecord::new("session", "stale").path("/app/settings/"));
    store.set(&CookieRecord::new("theme", "dark; high-contrast").expiry(Expiry::Never));
    println!("Document: {}", jar.url());
    println!("Keys: {:?}", store.keys());
    println!("theme = {:?}", store.get("theme"));
    println!("Stored entries: {}", jar.total_cookie_count());

    println!("\n--- Step 2: Removing at one path ---");
    store.remove("session", Some("/app/settings"), None);
    println!("Keys after remove(\"/app/settings\"): {:?}", store.keys());

    println!("\n--- Step 3: Removing across every enclosing path ---");
    store.remove_across_paths("session", None);
    println!("Keys: {:?}", store.keys());

    println!("\n--- Step 4: Clearing everything ---");
    store.clear_across_paths(None);
    println!(
        "Keys: {:?}, stored entries: {}",
        store.keys(),
        jar.total_cookie_count()
    );

    Ok(())
}
