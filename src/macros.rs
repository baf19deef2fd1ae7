// Macros to simplify rule declarations

/// Builds a `Vec<Rule>` from declarations of the form
///
/// - `"name": pattern => replacement`
/// - `eval "name": pattern => replacement` (folds constants)
/// - `"forward" <=> "backward": pattern => replacement` (both directions)
macro_rules! rules {
    () => {
        Vec::<$crate::rewriting::rule::Rule>::new()
    };
    (eval $name:literal : $from:expr => $to:expr $(, $($rest:tt)*)? ) => {{
        let mut v = vec![$crate::rewriting::rule::Rule::evaluating($name, $from, $to)];
        $( v.extend(rules!($($rest)*)); )?
        v
    }};
    ($forward:literal <=> $backward:literal : $from:expr => $to:expr $(, $($rest:tt)*)? ) => {{
        let from = $from;
        let to = $to;
        let mut v = vec![
            $crate::rewriting::rule::Rule::new($forward, from.clone(), to.clone()),
            $crate::rewriting::rule::Rule::new($backward, to, from),
        ];
        $( v.extend(rules!($($rest)*)); )?
        v
    }};
    ($name:literal : $from:expr => $to:expr $(, $($rest:tt)*)? ) => {{
        let mut v = vec![$crate::rewriting::rule::Rule::new($name, $from, $to)];
        $( v.extend(rules!($($rest)*)); )?
        v
    }};
}
