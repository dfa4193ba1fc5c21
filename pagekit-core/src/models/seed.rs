//! Random user generation for load and pagination testing

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use super::user::NewUser;

const NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Hannah",
];
const DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "example.com"];

/// Generate one user with a unique email.
///
/// The 12-character UUID fragment keeps emails unique across batches.
pub fn random_user<R: Rng + ?Sized>(rng: &mut R) -> NewUser {
    let name = NAMES.choose(rng).copied().unwrap_or("User");
    let domain = DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let unique = Uuid::new_v4().simple().to_string()[..12].to_owned();
    let email = format!("{}.{}@{}", name.to_lowercase(), unique, domain);
    let age = rng.gen_range(18..78);

    NewUser::new(&format!("{name} {unique}"), age, &email)
        .unwrap_or_else(|err| unreachable!("generated user failed validation: {err}"))
}

/// Generate `count` random users.
pub fn random_users(count: usize) -> Vec<NewUser> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_user(&mut rng)).collect()
}
