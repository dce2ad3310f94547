use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Slides:");
    for slide in &config.slides {
        println!("    {slide}");
    }
    println!("  Assets: {}", config.assets_dir.display());
    println!("  Interval: {}s", config.carousel.interval.as_secs());
    println!("  Fill delay: {}ms", config.carousel.fill_delay.as_millis());
    println!("  Animate: {}", bool_to_word(config.carousel.animated));
    println!("  Theme: {}", config.theme_name);
    println!("  Direct: {}", bool_to_word(config.direct));
    println!("  Log level: {}", config.log_level);
    println!("  Log file: {}", config.log_file.display());
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
