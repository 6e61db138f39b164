use spop_symbolic::{
    InvalidNameError, LinExpr, Operand, ParamExpr, unbound_lin_symbol, unbound_param_symbol,
};
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Only linear expressions are accepted here; the degree needs no runtime check.
fn describe_linear<E: LinExpr + ?Sized>(expr: &E) -> String {
    format!("{expr} is linear (degree {})", expr.degree())
}

fn describe_param<E: ParamExpr + ?Sized>(expr: &E) -> String {
    format!("{expr} is a parameter (degree {})", expr.degree())
}

fn main() -> Result<(), InvalidNameError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let x = unbound_lin_symbol("x_1")?;
    let c = unbound_param_symbol("cost")?;

    info!("{}", describe_linear(&*x));
    info!("{}", describe_param(&*c));
    info!(repr = %x.repr(), name = x.name(), "rendered");
    info!(
        same_name = x.identical_to(Operand::from(&*unbound_lin_symbol("x_1")?)),
        other_variant = x.identical_to(Operand::from(&*unbound_param_symbol("x_1")?)),
        "identity"
    );

    if let Err(err) = unbound_lin_symbol("x 1") {
        info!(%err, "rejected");
    }

    Ok(())
}
