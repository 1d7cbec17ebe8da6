#![no_main]
use libfuzzer_sys::fuzz_target;

use exptree::ExprStack;

// every byte is an instruction: three opcodes, everything else pushes a literal
fuzz_target!(|data: &[u8]| {
    let mut stack = ExprStack::<f64>::new();
    for (i, b) in data.iter().enumerate() {
        let _ = match b {
            b'+' => stack.addition().map(|_| ()),
            b'*' => stack.multiplication().map(|_| ()),
            b'-' => stack.unary_minus().map(|_| ()),
            _ if i % 7 == 0 => stack.push_number(f64::NAN).map(|_| ()),
            _ => stack.push_number(*b as f64 / 4.0).map(|_| ()),
        };
    }
    if let Ok(expr) = stack.finish() {
        let rendered = expr.render();
        assert!(rendered.matches('(').count() == rendered.matches(')').count());
        let _ = expr.eval();
    }
});
