/// Initialize the `env_logger` backend. Level defaults to `info`, `RUST_LOG`
/// overrides it.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(err) = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init()
    {
        log::debug!("logger already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init();
        init();
        log::info!("still logging");
    }
}
