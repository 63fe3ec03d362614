use mimic_uri::{MimicBrowser, Normalizer, UriParser};

fn main() {
    let parser = UriParser::default();

    // Print every rule with its documented examples
    for rule in MimicBrowser.descriptions() {
        println!("{}: {}", rule.name, rule.description);
        for example in rule.examples {
            let normalized = parser.parse(example.uri).expect("Failed to parse URI");
            println!("  {:?} -> {normalized}", example.uri); // e.g. "file:/C:path" -> file:///C:path
        }
    }

    let uri = parser
        .parse(" file://localhost/C|/Users/me/notes.txt\n")
        .expect("Failed to parse URI");
    println!("URI: {uri}"); // file:///C|/Users/me/notes.txt
    println!("Host: {:?}", uri.host()); // Some("")
    println!("Path: {}", uri.path()); // /C|/Users/me/notes.txt
}
