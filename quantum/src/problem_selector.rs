use std::{collections::VecDeque, panic, str::FromStr};

/// Gets the arguments from the command line and returns them as a VecDeque
pub fn get_args() -> VecDeque<String> {
    let mut args = std::env::args();
    // get rid of the first argument which is the program name
    args.next();

    args.collect()
}

/// Pops the next argument and parses it, falling back to `default`
/// when the argument is missing.
///
/// Panics with a readable message when the argument is present but malformed,
/// problems are run interactively so a bad input should stop the run.
pub fn next_arg<T: FromStr>(args: &mut VecDeque<String>, name: &str, default: T) -> T {
    match args.pop_front() {
        Some(arg) => arg
            .parse()
            .unwrap_or_else(|_| panic!("could not parse argument {name} from '{arg}'")),
        None => default,
    }
}

/// Pops `N` consecutive arguments, all of them or none.
pub fn next_args<T: FromStr + Copy, const N: usize>(
    args: &mut VecDeque<String>,
    name: &str,
    default: [T; N],
) -> [T; N] {
    if args.len() < N {
        return default;
    }

    let mut values = default;
    for value in values.iter_mut() {
        *value = next_arg(args, name, *value);
    }

    values
}

/// Trait for selecting a problem to run
pub trait ProblemSelector {
    /// Name of the problem group.
    const NAME: &'static str;

    /// Vector of all available problems to choose
    fn list() -> Vec<&'static str>;

    /// Given a problem number, run the problem from the list of problems.
    /// Returns false if no problem has the given number.
    fn methods(number: &str, args: &mut VecDeque<String>) -> bool;

    /// Select a problem to run preselected or from user input
    /// The problem can be run with -1 to run all problems.
    fn select(args: &mut VecDeque<String>) {
        let choice = match args.pop_front() {
            Some(arg) => arg,
            None => {
                println!();
                println!("{}, provide a problem number:", Self::NAME);
                println!("-1: run all problems");

                for (i, problem) in Self::list().iter().enumerate() {
                    println!("{}: {}", i, problem);
                }

                let mut input = String::new();
                if std::io::stdin().read_line(&mut input).is_err() {
                    println!("could not read the problem number");
                    return;
                }

                input.trim().to_string()
            }
        };

        if choice == "-1" {
            let failed = run_all(Self::list().len(), Self::methods);
            if failed > 0 {
                println!("{failed} problems failed");
            }

            return;
        }

        if !Self::methods(&choice, args) {
            println!("Problem {choice} not found in {}", Self::NAME);
        }
    }
}

/// Runs every problem with default arguments, returns the number of failed ones.
fn run_all(
    count: usize,
    methods: impl Fn(&str, &mut VecDeque<String>) -> bool + panic::RefUnwindSafe,
) -> usize {
    (0..count)
        .filter(|i| {
            let result = panic::catch_unwind(|| methods(&i.to_string(), &mut VecDeque::new()));

            if result.is_err() {
                println!("Problem {} failed", i);
            }
            result.is_err()
        })
        .count()
}

#[macro_export]
macro_rules! problems_impl {
    ($selector:ty, $name:expr, $($problem_type:expr => $method:expr),* $(,)?) => {
        impl $crate::problem_selector::ProblemSelector for $selector {
            const NAME: &'static str = $name;

            fn list() -> Vec<&'static str> {
                vec![$($problem_type),*]
            }

            #[allow(unused_assignments)]
            fn methods(number: &str, args: &mut std::collections::VecDeque<String>) -> bool {
                let name_list = Self::list();

                let mut i: usize = 0;
                $(
                    if i.to_string() == number {
                        println!("Chose problem: {}", name_list[i]);
                        $method(args);
                        return true;
                    }

                    i += 1;
                )*

                false
            }
        }
    };
}
