use std::borrow::Cow;

/// The set of navigable views and the parameters each one takes from the
/// URL. Unknown locations resolve to [`Route::NotFound`] instead of failing
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Details { id: i64 },
    Recommend { id: i64 },
    /// Mood browsing: `mood` and `region` are taken verbatim from the query;
    /// `page` is the integer parse of the query value if present, otherwise
    /// left for the view to default.
    Mood {
        mood: Option<String>,
        page: Option<u32>,
        region: Option<String>,
    },
    Chatbot,
    NotFound,
}

impl Route {
    /// Map a location (`path` with optional `?query`) to a view.
    pub fn parse(location: &str) -> Route {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search,
            ["details", id] => match id.parse::<i64>() {
                Ok(id) => Route::Details { id },
                Err(_) => Route::NotFound,
            },
            ["recommend", id] => match id.parse::<i64>() {
                Ok(id) => Route::Recommend { id },
                Err(_) => Route::NotFound,
            },
            // Bare /recommend is the mood variant, same as /mood.
            ["recommend"] | ["mood"] => mood_route(query),
            ["chatbot"] => Route::Chatbot,
            _ => Route::NotFound,
        }
    }
}

fn mood_route(query: &str) -> Route {
    let mut mood = None;
    let mut page = None;
    let mut region = None;
    for (key, value) in query_pairs(query) {
        match key.as_ref() {
            "mood" => mood = Some(value.into_owned()),
            "page" => page = value.parse::<u32>().ok(),
            "region" => region = Some(value.into_owned()),
            _ => {}
        }
    }
    Route::Mood { mood, page, region }
}

fn query_pairs(query: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    query.split('&').filter(|p| !p.is_empty()).map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode(key), decode(value))
    })
}

fn decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or_else(|_| Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_map_to_their_views() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/chatbot"), Route::Chatbot);
    }

    #[test]
    fn details_and_recommend_extract_the_id() {
        assert_eq!(Route::parse("/details/27205"), Route::Details { id: 27205 });
        assert_eq!(Route::parse("/recommend/42"), Route::Recommend { id: 42 });
    }

    #[test]
    fn non_numeric_ids_fall_through_to_not_found() {
        assert_eq!(Route::parse("/details/abc"), Route::NotFound);
    }

    #[test]
    fn mood_reads_all_three_query_parameters() {
        assert_eq!(
            Route::parse("/mood?mood=sci-fi&page=2&region=GB"),
            Route::Mood {
                mood: Some("sci-fi".to_string()),
                page: Some(2),
                region: Some("GB".to_string()),
            }
        );
    }

    #[test]
    fn mood_parameters_default_to_absent() {
        assert_eq!(
            Route::parse("/mood"),
            Route::Mood {
                mood: None,
                page: None,
                region: None,
            }
        );
    }

    #[test]
    fn unparseable_page_is_left_for_the_view_default() {
        assert_eq!(
            Route::parse("/mood?mood=happy&page=two"),
            Route::Mood {
                mood: Some("happy".to_string()),
                page: None,
                region: None,
            }
        );
    }

    #[test]
    fn mood_values_are_percent_decoded_verbatim() {
        assert_eq!(
            Route::parse("/mood?mood=sci%20fi"),
            Route::Mood {
                mood: Some("sci fi".to_string()),
                page: None,
                region: None,
            }
        );
    }

    #[test]
    fn bare_recommend_is_the_mood_variant() {
        assert_eq!(
            Route::parse("/recommend?mood=drama"),
            Route::Mood {
                mood: Some("drama".to_string()),
                page: None,
                region: None,
            }
        );
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::parse("/wat"), Route::NotFound);
        assert_eq!(Route::parse("/details/1/extra"), Route::NotFound);
    }
}
