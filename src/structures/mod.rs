/*!
The elements of the clausal fragment of first-order logic, and their representation.

- [Terms](term) are variables, constants, or functions applied to terms.
- [Literals](literal) are predicates applied to terms, either plain or negated.
- [Clauses](clause) are disjunctions of literals, kept duplicate-free and in a canonical order.
- [Substitutions](substitution) map variables to terms, and apply to each of the above.

Every structure is immutable once built, and each implements [Display](std::fmt::Display) with the rendering used throughout any report:

```rust
# use resolute::parse::parse_clause;
let clause = parse_clause("q(z), ~p(z,f(B))").unwrap();
assert_eq!(clause.to_string(), "[~p(z,f(B)), q(z)]");
```
*/

pub mod clause;
pub mod literal;
pub mod substitution;
pub mod term;
