use resolute::{
    parse::{parse_literal, parse_term},
    procedures::unification::{unify_complementary, unify_terms},
    structures::substitution::Substitution,
};

mod most_general_unifiers {
    use super::*;

    fn mgu(a: &str, b: &str) -> Option<Substitution> {
        unify_terms(&parse_term(a).unwrap(), &parse_term(b).unwrap(), false).ok()
    }

    #[test]
    fn deeply_nested_functions() {
        let sigma = mgu(
            "p(f(h(w)),y,g(k(f(h(w))),x))",
            "p(u,k(f(h(w))),g(z,h(w)))",
        )
        .expect("unifiable");

        assert_eq!(
            sigma.to_string(),
            "[f(h(w)) / u, k(f(h(w))) / y, k(f(h(w))) / z, h(w) / x]"
        );
    }

    #[test]
    fn unifiers_identify_their_inputs() {
        let pairs = [
            ("p(f(h(w)),y,g(k(f(h(w))),x))", "p(u,k(f(h(w))),g(z,h(w)))"),
            ("f(x,g(y))", "f(g(A),z)"),
            ("h(x,x)", "h(f(A),f(A))"),
            ("k(x,y,z)", "k(y,z,B)"),
        ];

        for (left, right) in pairs {
            let a = parse_term(left).unwrap();
            let b = parse_term(right).unwrap();
            let sigma = unify_terms(&a, &b, false).expect("unifiable");

            assert_eq!(a.apply(&sigma), b.apply(&sigma), "{left} against {right}");
        }
    }

    #[test]
    fn most_generality_over_a_sampled_alternative() {
        // x against y admits many unifiers; the one found maps variable to variable,
        // and grounding both sides afterwards recovers any more specific choice.
        let a = parse_term("p(x)").unwrap();
        let b = parse_term("p(y)").unwrap();

        let sigma = unify_terms(&a, &b, false).unwrap();
        assert_eq!(sigma.to_string(), "[y / x]");

        let rho = Substitution::of("y", parse_term("A").unwrap());
        let tau = sigma.compose(&rho);

        assert_eq!(a.apply(&tau).to_string(), "p(A)");
        assert_eq!(b.apply(&tau).to_string(), "p(A)");
    }

    #[test]
    fn mismatches_fail() {
        assert!(mgu("A", "B").is_none());
        assert!(mgu("f(x)", "g(y)").is_none());
        assert!(mgu("f(x,y)", "f(A)").is_none());
        assert!(mgu("A", "f(x)").is_none());
        assert!(mgu("f(x,x)", "f(A,B)").is_none());
    }
}

mod complementary_literals {
    use super::*;

    #[test]
    fn polarity_must_differ() {
        let plain = parse_literal("s(z)").unwrap();
        let negated = parse_literal("~s(A)").unwrap();

        let sigma = unify_complementary(&plain, &negated, false).unwrap();
        assert_eq!(sigma.to_string(), "[A / z]");

        assert!(unify_complementary(&plain, &plain, false).is_err());
    }

    #[test]
    fn names_and_arities_must_agree() {
        let s = parse_literal("s(z)").unwrap();

        assert!(unify_complementary(&s, &parse_literal("~t(A)").unwrap(), false).is_err());
        assert!(unify_complementary(&s, &parse_literal("~s(A,B)").unwrap(), false).is_err());
    }
}

mod occurs {
    use super::*;

    #[test]
    fn the_cyclic_binding_forms_by_default() {
        let sigma = unify_terms(
            &parse_term("x").unwrap(),
            &parse_term("f(x)").unwrap(),
            false,
        )
        .unwrap();

        assert_eq!(sigma.to_string(), "[f(x) / x]");
    }

    #[test]
    fn the_check_refuses_the_cyclic_binding() {
        assert!(unify_terms(
            &parse_term("x").unwrap(),
            &parse_term("f(x)").unwrap(),
            true,
        )
        .is_err());
    }
}
