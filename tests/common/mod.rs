use rust_decimal::Decimal;

use pensum::allocation::Hours;
use pensum::input::toml_input::{Global, Month};
use pensum::input::Config;

#[must_use]
pub fn hours(value: Decimal) -> Hours {
    Hours::new(value).expect("hours should not be negative")
}

#[allow(dead_code)]
pub fn make_global(name: &str, pensum: &str) -> String {
    format!(
        concat!(
            "[about]\n",
            "name = \"{name}\"\n",
            "\n",
            "[allocation]\n",
            "pensum = {pensum}\n",
            "\n",
            "[allocation.weekly]\n",
            "monday = 4.0\n",
            "tuesday = 4.0\n",
            "wednesday = 3.5\n",
            "thursday = 0\n",
            "friday = 2.0\n",
        ),
        name = name,
        pensum = pensum
    )
}

#[must_use]
#[allow(dead_code)]
pub fn make_config(global: &str, month: &str) -> Config {
    let global: Global = toml::from_str(global).expect("toml should be valid");
    let month: Month = toml::from_str(month).expect("toml should be valid");

    Config::from_toml(month, global)
        .build()
        .expect("config should be valid")
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
