use std::io::{BufReader, Read};
use serde_json::de::Deserializer;
use serde_json::value::Value;

 ///If a reader returns a JSON array, this function will parse it and return it as a Vec<Value>.
 ///e.g.: Your reader has a JSON array but nothing else: [{...}, {...}, {...}]
 ///A single object root is accepted as a one-row document.
pub fn parse_json_rows_root<R: Read>(reader: R) -> Result<Vec<Value>, String> {
    match read_json_root(reader)? {
        Value::Array(root) => Ok(root),
        object @ Value::Object(_) => Ok(vec![object]),
        _ => Err("JSON root is neither an array nor an object".to_string()),
    }
}

fn read_json_root<R: Read>(reader: R) -> Result<Value, String> {
    let buf_reader = BufReader::new(reader);
    let mut stream = Deserializer::from_reader(buf_reader).into_iter::<Value>();

    match stream.next() {
        Some(Ok(root)) => Ok(root),
        Some(Err(e)) => Err(format!("Error deserializing JSON root: {}", e)),
        None => Err("JSON is empty".to_string()),
    }
}
