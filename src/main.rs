use ranged_tree::collections::binary_tree::OrderedMap;
use ranged_tree::collections::binary_tree::map::BySign;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut map = OrderedMap::new(BySign(|a: &i32, b: &i32| a - b));
    for (key, value) in [(3, "three"), (1, "one"), (4, "four"), (2, "two")] {
        map.insert(key, value);
    }
    info!(len = map.len(), depth = map.depth(), "map built");

    map.in_order(|session| {
        for (key, value) in session {
            println!("{key}  -->  {value}");
        }
    });
}
