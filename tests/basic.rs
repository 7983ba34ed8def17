use resolute::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {
    use super::*;

    #[test]
    fn one_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(A)"), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.saturate(), Ok(Report::Consistent));
    }

    #[test]
    fn complementary_units() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause("p(A)").is_ok());
        assert!(ctx.add_goal("~p(A)").is_ok());

        assert_eq!(ctx.saturate(), Ok(Report::Contradiction));
    }

    #[test]
    fn chained_implications() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause("~man(x), mortal(x)").is_ok());
        assert!(ctx.add_clause("man(Socrates)").is_ok());
        assert!(ctx.add_goal("~mortal(Socrates)").is_ok());

        assert_eq!(ctx.saturate(), Ok(Report::Contradiction));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause("p(x), q(x), p(x)").is_ok());

        let stored = ctx.clause_db.get(0).unwrap();
        assert_eq!(stored.clause().size(), 2);
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(x), ~q(x), ~p(x)"), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.clause_db.count(), 0);
    }

    #[test]
    fn malformed_clauses_are_refused() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause("p(x").is_err());
        assert!(ctx.add_clause("P(x)").is_err());
        assert!(ctx.add_clause("p()").is_err());
        assert!(ctx.add_clause("p(~q(x))").is_err());

        assert_eq!(ctx.clause_db.count(), 0);
    }

    #[test]
    fn identifiers_follow_insertion_order() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause("p(A)"), Ok(ClauseOk::Added(0)));
        assert_eq!(ctx.add_clause("q(A)"), Ok(ClauseOk::Added(1)));
        assert_eq!(ctx.add_clause("r(A)"), Ok(ClauseOk::Added(2)));
    }
}

mod problems {
    use super::*;
    use resolute::builder::Problem;

    #[test]
    fn a_problem_loads_knowledge_base_first() {
        let problem = Problem::from_json(
            r#"{"knowledge_base": ["p(A)", "q(A)"], "negated_theorem_predicates": ["~q(A)"]}"#,
        )
        .unwrap();

        let ctx = Context::from_problem(&problem, Config::default()).unwrap();

        let listed: Vec<String> = ctx
            .clause_db
            .original_clauses()
            .map(|stored| stored.clause().to_string())
            .collect();

        assert_eq!(listed, vec!["[p(A)]", "[q(A)]", "[~q(A)]"]);
    }

    #[test]
    fn a_problem_with_a_bad_clause_fails_to_build() {
        let problem = Problem::from_json(
            r#"{"knowledge_base": ["p(A", "q(A)"], "negated_theorem_predicates": []}"#,
        )
        .unwrap();

        assert!(Context::from_problem(&problem, Config::default()).is_err());
    }
}
