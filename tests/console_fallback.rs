//! Behavior when the function environment is not configured.

use std::collections::HashMap;
use std::sync::Arc;

use function_logging::config::{self, FUNCTION_NAME_ENV, FUNCTION_REGION_ENV, PROJECT_ENV};
use function_logging::{Logging, MemoryConsole};

fn logging_with_env(vars: &[(&str, &str)]) -> (Logging, Arc<MemoryConsole>) {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let console = Arc::new(MemoryConsole::new());
    let logging = Logging::from_config(
        config::from_lookup(|name| env.get(name).cloned()),
        console.clone(),
    );
    (logging, console)
}

#[tokio::test]
async fn test_unset_environment_writes_to_console() {
    let (logging, console) = logging_with_env(&[]);
    assert!(!logging.is_remote());

    logging.info(None).println(&[&"hello"]);
    logging.error(None).printf(format_args!("code={}", 42));

    assert_eq!(console.stdout(), "hello\n");
    assert_eq!(
        console.stderr(),
        "Failed to create logging client: GCP_PROJECT environment variable unset or missing\n\
         code=42\n"
    );
    assert_eq!(logging.flush().await, Ok(()));
}

#[tokio::test]
async fn test_each_missing_variable_degrades() {
    let all = [
        (PROJECT_ENV, "p"),
        (FUNCTION_NAME_ENV, "f"),
        (FUNCTION_REGION_ENV, "r"),
    ];

    for skip in 0..all.len() {
        let vars: Vec<(&str, &str)> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, pair)| *pair)
            .collect();
        let (logging, console) = logging_with_env(&vars);

        assert!(!logging.is_remote());
        let expected = format!(
            "Failed to create logging client: {} environment variable unset or missing\n",
            all[skip].0
        );
        assert_eq!(console.stderr(), expected);

        logging.warning(None).print(&[&"still logging"]);
        assert_eq!(console.stdout(), "still logging\n");
    }
}

#[tokio::test]
async fn test_println_and_print_log_same_payload() {
    let (logging, console) = logging_with_env(&[]);

    logging.debug(None).println(&[&"a"]);
    logging.debug(None).print(&[&"a\n"]);

    assert_eq!(console.stdout(), "a\na\n");
}

#[tokio::test]
async fn test_high_severities_use_stderr() {
    let (logging, console) = logging_with_env(&[]);
    let before = console.stderr();

    logging.critical(None).print(&[&"c"]);
    logging.alert(None).print(&[&"a"]);
    logging.emergency(None).print(&[&"e"]);
    logging.default(None).print(&[&"d"]);
    logging.notice(None).print(&[&"n"]);

    assert_eq!(console.stderr(), format!("{}c\na\ne\n", before));
    assert_eq!(console.stdout(), "d\nn\n");
}
