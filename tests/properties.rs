use proptest::prelude::*;
use tally::{
    BinaryOperator, Environment, Expr, interpreter::evaluator::binary::apply, parse,
};

fn additive() -> impl Strategy<Value = (char, BinaryOperator)> {
    prop::sample::select(vec![('+', BinaryOperator::Add), ('-', BinaryOperator::Sub)])
}

fn multiplicative() -> impl Strategy<Value = (char, BinaryOperator)> {
    prop::sample::select(vec![('*', BinaryOperator::Mul),
                              ('×', BinaryOperator::Mul),
                              ('/', BinaryOperator::Div),
                              ('÷', BinaryOperator::Div)])
}

fn same_level_pair() -> impl Strategy<Value = ((char, BinaryOperator), (char, BinaryOperator))> {
    prop_oneof![(additive(), additive()), (multiplicative(), multiplicative())]
}

proptest! {
    #[test]
    fn decimal_literals_parse_to_their_value(src in "-?[0-9]{1,15}(\\.[0-9]{0,10})?") {
        let expected: f64 = src.parse().unwrap();
        match parse(&src) {
            Ok(Expr::Literal { value, .. }) => prop_assert_eq!(value, expected),
            other => prop_assert!(false, "{:?} parsed as {:?}", src, other),
        }
    }

    #[test]
    fn same_precedence_operators_associate_left(a in 1u32..1000,
                                                b in 1u32..1000,
                                                c in 1u32..1000,
                                                ((g1, op1), (g2, op2)) in same_level_pair()) {
        let src = format!("{a} {g1} {b} {g2} {c}");
        let expr = parse(&src).unwrap();

        let Expr::BinaryOp { left, op, .. } = &expr else {
            panic!("{src:?} did not parse as a binary operation");
        };
        prop_assert_eq!(*op, op2);
        let left_is_op1 = matches!(**left, Expr::BinaryOp { op, .. } if op == op1);
        prop_assert!(left_is_op1);

        let expected = apply(op2, apply(op1, f64::from(a), f64::from(b)), f64::from(c));
        prop_assert_eq!(Environment::new().eval(&expr), expected);
    }
}
