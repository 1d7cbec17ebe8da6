use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exptree::{Expr, ExprStack};

const BENCH_DEPTHS: [usize; 3] = [4, 8, 12];

/// Balanced tree with alternating operators and `2^depth` leaves.
fn balanced(depth: usize, leaf: f64) -> Expr {
    if depth == 0 {
        return Expr::number(leaf).unwrap();
    }
    let left = balanced(depth - 1, leaf + 0.5);
    let right = balanced(depth - 1, leaf - 0.25);
    match depth % 3 {
        0 => Expr::addition(left, right),
        1 => Expr::multiplication(left, Expr::unary_minus(right)),
        _ => Expr::addition(Expr::unary_minus(left), right),
    }
}

fn eval(c: &mut Criterion) {
    for depth in BENCH_DEPTHS {
        let expr = balanced(depth, 1.0);
        c.bench_function(&format!("eval_depth_{depth}"), |b| {
            b.iter(|| black_box(&expr).eval())
        });
    }
}

fn render(c: &mut Criterion) {
    for depth in BENCH_DEPTHS {
        let expr = balanced(depth, 1.0);
        c.bench_function(&format!("render_depth_{depth}"), |b| {
            b.iter(|| black_box(&expr).render())
        });
    }
}

fn build_postfix(c: &mut Criterion) {
    c.bench_function("build_postfix_chain_1000", |b| {
        b.iter(|| {
            let mut stack = ExprStack::new();
            stack.push_number(black_box(1.5)).unwrap();
            for i in 0..1000 {
                stack.push_number(i as f64).unwrap();
                if i % 2 == 0 {
                    stack.addition().unwrap();
                } else {
                    stack.multiplication().unwrap().unary_minus().unwrap();
                }
            }
            stack.finish().unwrap()
        })
    });
}

criterion_group!(benches, eval, render, build_postfix);
criterion_main!(benches);
