use realsize_core::{FixedResolution, ResolutionSource, ScaleContext, ScaleError};
use realsize_platform::{EnvResolution, ResolutionChain};

// Each test owns its variable, so parallel tests never race on one name.
fn set(var: &str, value: &str) {
    // SAFETY: no other thread reads or writes this variable.
    unsafe { std::env::set_var(var, value) };
}

#[test]
fn test_env_resolution_reads_variable() {
    let var = "REALSIZE_IT_DPI_READ";
    set(var, "144");
    let source = EnvResolution::new(var);
    assert_eq!(source.var(), var);
    assert_eq!(source.resolution(), Ok(144));

    set(var, " 120 ");
    assert_eq!(source.resolution(), Ok(120));
}

#[test]
fn test_env_resolution_rejects_bad_values() {
    let var = "REALSIZE_IT_DPI_BAD";
    for value in ["0", "wide", "-96", ""] {
        set(var, value);
        match EnvResolution::new(var).resolution() {
            Err(ScaleError::ResolutionUnavailable(msg)) => assert!(msg.contains(var)),
            other => panic!("{value:?}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_context_follows_env_override() {
    let var = "REALSIZE_IT_DPI_CONTEXT";
    set(var, "96");
    let chain = ResolutionChain::new()
        .with(EnvResolution::new(var))
        .with(FixedResolution(72));
    let ctx = ScaleContext::new(chain).unwrap();
    assert_eq!(ctx.resolution(), 96);

    set(var, "192");
    assert_eq!(ctx.refresh_resolution(), Ok(true));
    assert_eq!(ctx.resolution(), 192);

    // A broken override falls through to the next source.
    set(var, "nonsense");
    assert_eq!(ctx.refresh_resolution(), Ok(true));
    assert_eq!(ctx.resolution(), 72);
}
