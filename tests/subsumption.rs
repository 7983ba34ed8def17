use resolute::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    parse::parse_clause,
    procedures::subsumption::{strictly_subsumes, subsumes, variants},
    reports::Report,
};

mod the_check {
    use super::*;

    #[test]
    fn instances_are_subsumed() {
        let general = parse_clause("p(x)").unwrap();
        let instance = parse_clause("p(A)").unwrap();

        assert!(subsumes(&general, &instance));
        assert!(strictly_subsumes(&general, &instance));
        assert!(!subsumes(&instance, &general));
    }

    #[test]
    fn wider_clauses_are_subsumed_by_their_cores() {
        let core = parse_clause("p(x)").unwrap();
        let wider = parse_clause("p(A), q(B)").unwrap();

        assert!(strictly_subsumes(&core, &wider));
        assert!(!subsumes(&wider, &core));
    }

    #[test]
    fn renamings_are_variants() {
        let a = parse_clause("~p(x), q(x)").unwrap();
        let b = parse_clause("~p(v), q(v)").unwrap();

        assert!(variants(&a, &b));
        assert!(!strictly_subsumes(&a, &b));
    }

    #[test]
    fn polarity_blocks_subsumption() {
        let a = parse_clause("p(x)").unwrap();
        let b = parse_clause("~p(A)").unwrap();

        assert!(!subsumes(&a, &b));
    }

    #[test]
    fn functions_constrain_the_mapping() {
        let a = parse_clause("p(f(x))").unwrap();

        assert!(subsumes(&a, &parse_clause("p(f(g(A)))").unwrap()));
        assert!(!subsumes(&a, &parse_clause("p(A)").unwrap()));
    }
}

mod during_a_search {
    use super::*;

    #[test]
    fn an_instance_arriving_after_its_general_form_is_refused() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(x)"), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.add_clause("p(A)"), Ok(ClauseOk::Subsumed));

        assert!(ctx.add_goal("~p(A)").is_ok());
        assert_eq!(ctx.saturate(), Ok(Report::Contradiction));

        let trace = ctx.refutation().unwrap();
        assert_eq!(
            trace.to_string(),
            "[p(x)] | [~p(A)] -> [] with substitution [A / x]"
        );
    }

    #[test]
    fn a_general_form_arriving_late_retires_its_instances() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(A), q(A)"), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.add_clause("p(x), q(x)"), Ok(ClauseOk::Added(1)));

        assert!(!ctx.clause_db.get(0).unwrap().is_live());
        assert!(ctx.clause_db.get(1).unwrap().is_live());
    }

    #[test]
    fn a_variant_of_a_stored_clause_is_refused() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(x), q(x)"), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.add_clause("p(other), q(other)"), Ok(ClauseOk::Subsumed));

        assert!(ctx.clause_db.get(0).unwrap().is_live());
    }

    #[test]
    fn subsumed_resolvents_are_not_stored() {
        let mut ctx = Context::from_config(Config::default());

        // Resolving the implication against p(A) yields [q(A)], already stored.
        ctx.add_clause("~p(x), q(x)").unwrap();
        ctx.add_clause("p(A)").unwrap();
        ctx.add_clause("q(A)").unwrap();

        ctx.saturate().unwrap();

        assert_eq!(ctx.counters.forward_subsumed, 1);
        assert_eq!(ctx.clause_db.count(), 3);
    }
}
