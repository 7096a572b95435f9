use color_eyre::Result;
use expression_visitor::{Env, Evaluator, Expr};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn c(v: i64) -> Expr {
    Expr::constant(v)
}

fn v(n: &str) -> Expr {
    Expr::variable(n)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let evaluator = Evaluator::new(Env::from([("x", 5), ("y", 7), ("z", 3)]));

    println!("Assuming: x = 5, y = 7 and z = 3.\n");

    let sections: [(&str, Vec<(&str, Expr)>); 4] = [
        ("Constants", vec![("5", c(5)), ("4", c(4))]),
        ("Variables", vec![("x", v("x")), ("y", v("y")), ("z", v("z"))]),
        (
            "Simple examples",
            vec![
                ("1 + 2", Expr::add(c(1), c(2))),
                ("x * 5", Expr::mul(v("x"), c(5))),
                ("7 / z", Expr::div(c(7), v("z"))),
                ("y - z", Expr::sub(v("y"), v("z"))),
            ],
        ),
        (
            "More complex examples",
            vec![
                (
                    "(1 + 2) * (x + 3) - 7",
                    Expr::sub(Expr::mul(Expr::add(c(1), c(2)), Expr::add(v("x"), c(3))), c(7)),
                ),
                (
                    "((z + 7) * (y + 3)) / (5 * x - 4)",
                    Expr::div(
                        Expr::mul(Expr::add(v("z"), c(7)), Expr::add(v("y"), c(3))),
                        Expr::sub(Expr::mul(c(5), v("x")), c(4)),
                    ),
                ),
            ],
        ),
    ];

    for (i, (header, examples)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", header);
        for (label, expr) in examples {
            println!("{} = {}", label, evaluator.eval(expr)?);
        }
    }

    Ok(())
}
