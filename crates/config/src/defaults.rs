/// Leg slots offered by the spread entry form.
pub const DEFAULT_MAX_LEGS: usize = 4;

pub fn default_max_legs() -> usize {
    DEFAULT_MAX_LEGS
}

pub fn default_contract_size() -> f64 {
    1.0
}

pub fn default_output_format() -> String {
    "table".to_string()
}

pub fn default_log_format() -> String {
    "pretty".to_string()
}

pub fn default_show_legs() -> bool {
    true
}

pub fn default_precision() -> usize {
    2
}
