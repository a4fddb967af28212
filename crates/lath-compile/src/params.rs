use smol_str::SmolStr;

/// Name the parser gives the pass-through bucket of call-site parameters.
const REST_NAME: &str = "*";

/// A required parameter was absent at a plugin call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required parameter \"{0}\"")]
pub struct MissingParameter(pub SmolStr);

/// Parameters collected for one plugin call site, each a piece of compiled
/// expression source keyed by parameter name.
///
/// Entries keep the order they were written in at the call site. A rest
/// bucket can be attached for plugins that forward unknown parameters, and is
/// folded into the entries by [`merged`](CompiledParams::merged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledParams {
    entries: Vec<(SmolStr, String)>,
    rest: Option<Vec<(SmolStr, String)>>,
}

impl CompiledParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter. A repeated name overwrites the earlier value in
    /// place instead of moving the entry back.
    pub fn insert(&mut self, name: impl Into<SmolStr>, expr: impl Into<String>) {
        let name = name.into();
        let expr = expr.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = expr,
            None => self.entries.push((name, expr)),
        }
    }

    /// Attaches the rest bucket, replacing any previous one.
    pub fn set_rest<N, E, I>(&mut self, rest: I)
    where
        N: Into<SmolStr>,
        E: Into<String>,
        I: IntoIterator<Item = (N, E)>,
    {
        self.rest = Some(
            rest.into_iter()
                .map(|(name, expr)| (name.into(), expr.into()))
                .collect(),
        );
    }

    pub fn rest(&self) -> Option<&[(SmolStr, String)]> {
        self.rest.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, expr)| expr.as_str())
    }

    /// Like [`get`](CompiledParams::get), but a missing parameter is a
    /// compile error the caller reports.
    pub fn required(&self, name: &str) -> Result<&str, MissingParameter> {
        self.get(name)
            .ok_or_else(|| MissingParameter(SmolStr::new(name)))
    }

    /// Entries with the rest bucket folded in: a bucket entry overwrites a
    /// same-named entry in place, new names append in bucket order, and the
    /// bucket name itself never survives.
    pub fn merged(&self) -> Vec<(SmolStr, String)> {
        let mut merged = self.entries.clone();
        if let Some(rest) = &self.rest {
            for (name, expr) in rest {
                match merged.iter_mut().find(|(n, _)| n == name) {
                    Some((_, existing)) => *existing = expr.clone(),
                    None => merged.push((name.clone(), expr.clone())),
                }
            }
        }
        merged.retain(|(name, _)| name.as_str() != REST_NAME);
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &str)> {
        self.entries.iter().map(|(name, expr)| (name, expr.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<SmolStr>, E: Into<String>> FromIterator<(N, E)> for CompiledParams {
    fn from_iter<I: IntoIterator<Item = (N, E)>>(iter: I) -> Self {
        let mut params = CompiledParams::new();
        for (name, expr) in iter {
            params.insert(name, expr);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[(SmolStr, String)]) -> Vec<&str> {
        entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn test_insert_keeps_call_site_order() {
        let params: CompiledParams =
            [("href", "'/'"), ("id", "'nav'"), ("class", "'top'")]
                .into_iter()
                .collect();

        let collected: Vec<&str> = params.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(collected, vec!["href", "id", "class"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut params: CompiledParams =
            [("id", "'a'"), ("class", "'b'")].into_iter().collect();
        params.insert("id", "'c'");

        assert_eq!(params.get("id"), Some("'c'"));
        assert_eq!(names(&params.merged()), vec!["id", "class"]);
    }

    #[test]
    fn test_get_and_required() {
        let params: CompiledParams = [("value", "$foo")].into_iter().collect();

        assert_eq!(params.get("value"), Some("$foo"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.required("value"), Ok("$foo"));
        assert_eq!(
            params.required("missing"),
            Err(MissingParameter(SmolStr::new("missing")))
        );
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = MissingParameter(SmolStr::new("value"));
        assert_eq!(err.to_string(), "missing required parameter \"value\"");
    }

    #[test]
    fn test_merged_without_rest_is_identity() {
        let params: CompiledParams = [("id", "'a'")].into_iter().collect();
        assert_eq!(params.merged(), vec![(SmolStr::new("id"), "'a'".to_string())]);
    }

    #[test]
    fn test_merged_overwrites_in_place_and_appends() {
        let mut params: CompiledParams =
            [("href", "'/'"), ("id", "'1'")].into_iter().collect();
        params.set_rest([("id", "'2'"), ("class", "'c'")]);

        assert_eq!(
            params.merged(),
            vec![
                (SmolStr::new("href"), "'/'".to_string()),
                (SmolStr::new("id"), "'2'".to_string()),
                (SmolStr::new("class"), "'c'".to_string()),
            ]
        );
    }

    #[test]
    fn test_merged_drops_nested_bucket_name() {
        let mut params: CompiledParams = [("id", "'a'")].into_iter().collect();
        params.set_rest([("*", "'ignored'"), ("title", "'t'")]);

        assert_eq!(names(&params.merged()), vec!["id", "title"]);
    }
}
