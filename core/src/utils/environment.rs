use std::collections::HashMap;
use std::env::vars_os;

/// Get a specific environment variable value
pub(crate) fn get_env_value(value: &str) -> String {
    let envs = get_env();
    if let Some(env) = envs.get(value) {
        return env.to_string();
    }
    String::new()
}

/// Get all environment variables associated with the hostinv process
pub(crate) fn get_env() -> HashMap<String, String> {
    let envs = vars_os();
    let mut environment = HashMap::new();
    for (key, value) in envs {
        environment.insert(
            key.into_string().unwrap_or_default(),
            value.into_string().unwrap_or_default(),
        );
    }
    environment
}
