use nlpd::designer::registry;

/// Prints every field, grouped by section, with its kind, domain and default.
pub fn list_fields() {
    for (section, specs) in registry().sections() {
        println!("\n## {section}");
        for spec in specs {
            println!("  {:<22}{:<12}{}", spec.name, spec.kind.to_string(), spec.domain);
            println!("  {:<22}{:<12}default: {}", "", "", spec.default);
        }
    }
}
