use skema::{PortSchemeMap, SchemeResolver};

fn main() -> skema::Result<()> {
    // Build a table for an internal environment and inject it wholesale
    let ports: PortSchemeMap = [
        (3000, "http"),
        (8443, "https"),
        (5432, "postgres"),
        (6379, "redis"),
    ]
    .into_iter()
    .collect();

    let mut resolver = SchemeResolver::with_port_map(ports);

    for url in [
        "//api.internal:3000/v1/health",
        "//gateway.internal:8443/admin",
        "//db.internal:5432",
        "//cache.internal:6379/0",
        "//unknown.internal:4000/",
    ] {
        resolver.register(url);
    }

    resolver.resolve_all();

    for entry in resolver.iter() {
        println!(
            "{} -> {} ({})",
            entry.original(),
            entry.normalized_url().unwrap_or("<unresolved>"),
            entry.scheme().map_or("<unresolved>", |scheme| scheme.as_str()),
        );
    }

    // One-off additions do not disturb already-resolved entries
    resolver.map_port(4000, "http");
    resolver.register("//unknown.internal:4000/");
    println!("After mapping 4000: {}", resolver.normalized_url(None)?);

    Ok(())
}
