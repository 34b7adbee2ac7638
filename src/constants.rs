pub const CONFIG_FILE: &str = ".teamzone-config.json";
pub const STORE_FILE: &str = ".teamzone.json";
pub const STORE_ENV_VAR: &str = "TEAMZONE_STORE";

pub const DEFAULT_WORK_START: &str = "09:00";
pub const DEFAULT_WORK_END: &str = "17:00";

pub const MINUTES_PER_DAY: i64 = 1440;
