use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use num::Float;

use crate::Number;

impl<T: Float + Serialize> Serialize for Number<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Float + Deserialize<'de>> Deserialize<'de> for Number<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Number::new(value).map_err(|epe| de::Error::custom(format!("Invalid literal - {}", epe.msg)))
    }
}

#[cfg(test)]
use {crate::Expr, serde_test::Token};

#[test]
fn test_ser_de() {
    let expr = Expr::addition(Expr::number(2.5).unwrap(), Expr::number(-1.0).unwrap());
    serde_test::assert_tokens(
        &expr,
        &[
            Token::TupleVariant {
                name: "Expr",
                variant: "Add",
                len: 2,
            },
            Token::NewtypeVariant {
                name: "Expr",
                variant: "Num",
            },
            Token::F64(2.5),
            Token::NewtypeVariant {
                name: "Expr",
                variant: "Num",
            },
            Token::F64(-1.0),
            Token::TupleVariantEnd,
        ],
    );

    let test = |expr: Expr<f64>| {
        let serialized = serde_json::to_string(&expr).unwrap();
        let deserialized = serde_json::from_str::<Expr<f64>>(serialized.as_str()).unwrap();
        assert_eq!(expr.render(), deserialized.render());
        assert_eq!(expr.eval(), deserialized.eval());
        assert_eq!(expr, deserialized);
    };
    let num = |x: f64| Expr::number(x).unwrap();
    test(num(0.1));
    test((num(2.5) + num(3.5)) * -num(5.0));
    test(-(-(num(1.0) * num(1e300))));
}

#[test]
fn test_json_layout() {
    let expr = Expr::unary_minus(Expr::number(5.0).unwrap());
    assert_eq!(serde_json::to_string(&expr).unwrap(), r#"{"Neg":{"Num":5.0}}"#);
    let expr = serde_json::from_str::<Expr<f64>>(r#"{"Mul":[{"Num":2},{"Num":0.5}]}"#).unwrap();
    assert_eq!(expr.eval(), 1.0);
    assert_eq!(expr.render(), "(2 * 0.5)");
}

#[test]
fn test_de_invalid() {
    serde_test::assert_de_tokens_error::<Expr<f64>>(
        &[
            Token::NewtypeVariant {
                name: "Expr",
                variant: "Num",
            },
            Token::F64(f64::NAN),
        ],
        "Invalid literal - number literal must not be NaN",
    );
    // absent children
    assert!(serde_json::from_str::<Expr<f64>>(r#"{"Add":[{"Num":1.0}]}"#).is_err());
    assert!(serde_json::from_str::<Expr<f64>>(r#"{"Neg":null}"#).is_err());
    assert!(serde_json::from_str::<Expr<f64>>(r#"{"Mul":[]}"#).is_err());
}
