use skema::SchemeResolver;

fn main() -> skema::Result<()> {
    let mut resolver = SchemeResolver::new();

    // An explicit scheme is returned literally and the URL stays untouched
    resolver.register("https://example.com:8080/path?query=value#hash");
    println!("Scheme: {}", resolver.scheme(None)?); // https
    println!("Normalized: {}", resolver.normalized_url(None)?); // unchanged
    println!("Web scheme: {}", resolver.is_web_scheme(None)?); // true

    // A protocol-relative URL gets its scheme from the port table
    resolver.register("//example.com:443/secure");
    println!("Scheme: {}", resolver.scheme(None)?); // https
    println!("Normalized: {}", resolver.normalized_url(None)?); // https://example.com:443/secure

    // An unmapped port resolves to the unknown marker
    resolver.register("//example.com:9999/odd");
    println!("Scheme: {}", resolver.scheme(None)?); // UNKNOWN
    println!("Normalized: {}", resolver.normalized_url(None)?); // unchanged

    // Forcing injects the default scheme into the normalized form
    resolver.set_force_default_scheme(true);
    resolver.register("//example.com:9999/odd");
    println!("Normalized: {}", resolver.normalized_url(None)?); // http://example.com:9999/odd

    Ok(())
}
