use exptree::{ExResult, Expr};
use tracing_subscriber::EnvFilter;

fn main() -> ExResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let expr = Expr::multiplication(
        Expr::addition(Expr::number(2.5)?, Expr::number(3.5)?),
        Expr::unary_minus(Expr::number(5.0)?),
    );
    tracing::debug!("built {:?}", expr);

    println!("{:?}", expr.eval());
    println!("{}", expr.render());
    Ok(())
}
