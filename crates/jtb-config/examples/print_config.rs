/// Example program to print the loaded configuration
///
/// Run with: cargo run -p jtb-config --example print_config

fn main() {
    let config = jtb_config::JtbConfig::load();

    println!("=== JTB Configuration ===\n");

    println!("Parser Settings:");
    println!("  Base Font Size: {}", config.parser.base_font_size);
    println!("  Recognition Threshold: {}", config.parser.recognition_threshold);
    println!("  Mode: {:?}", config.parser.mode);
    println!("  Diagnostics: {:?}", config.parser.diagnostics);
    println!();

    println!("Output Settings:");
    println!("  Pretty: {}", config.output.pretty);
    println!("  Validate: {}", config.output.validate);
    println!();

    match config.parser.parse_options() {
        Ok(options) => println!("Effective parse options: {options:?}\n"),
        Err(e) => eprintln!("Invalid parser settings: {e}\n"),
    }

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
