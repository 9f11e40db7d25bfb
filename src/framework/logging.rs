use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[allow(unused_imports)]
use tracing::{error, trace};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new("tallybot=info,tracing_unwrap=info")
                .expect("hard-coded env filter should be valid")
        }))
        .init();

    trace!("finished");
}
