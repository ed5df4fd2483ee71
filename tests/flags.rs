use serde_json::json;
use typed_plotly::schema::{Histogram, HoverInfo, Image, ImageHoverInfo, Surface, SurfaceHoverInfo};
use typed_plotly::{Flag, FlagSet};

#[test]
fn hoverinfo_end_to_end() {
    let trace = Histogram {
        hover_info: Some(HoverInfo::Name | HoverInfo::X),
        opacity: Some(0.5),
        name: Some("trace1".into()),
        ..Default::default()
    };
    let v = serde_json::to_value(&trace).unwrap();
    assert_eq!(
        v,
        json!({"hoverinfo": "x+name", "opacity": 0.5, "name": "trace1"})
    );
}

#[test]
fn encoding_ignores_insertion_order() {
    let a: FlagSet<HoverInfo> = [HoverInfo::Skip, HoverInfo::Text, HoverInfo::X]
        .into_iter()
        .collect();
    let b = HoverInfo::X | HoverInfo::Text | HoverInfo::Skip;
    assert_eq!(a, b);
    assert_eq!(a.encode(), "x+text+skip");
    assert_eq!(b.encode(), "x+text+skip");
}

#[test]
fn empty_set_encodes_to_empty_string_in_every_universe() {
    assert_eq!(FlagSet::<HoverInfo>::empty().encode(), "");
    assert_eq!(FlagSet::<SurfaceHoverInfo>::empty().encode(), "");
    assert_eq!(FlagSet::<ImageHoverInfo>::empty().encode(), "");

    let trace = Surface {
        hover_info: Some(FlagSet::empty()),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&trace).unwrap(), json!({"hoverinfo": ""}));
    assert_eq!(serde_json::to_value(Surface::default()).unwrap(), json!({}));
}

#[test]
fn full_universe_follows_declaration_order() {
    assert_eq!(
        FlagSet::<HoverInfo>::all().encode(),
        "x+y+z+text+name+all+none+skip"
    );
    assert_eq!(FlagSet::<SurfaceHoverInfo>::all().encode(), "x+y+z+text+name");
    assert_eq!(
        FlagSet::<ImageHoverInfo>::all().encode(),
        "x+y+z+color+name+text"
    );
}

#[test]
fn every_hoverinfo_subset_round_trips() {
    for bits in 0u32..(1 << HoverInfo::ALL.len()) {
        let set: FlagSet<HoverInfo> = HoverInfo::ALL
            .iter()
            .copied()
            .filter(|f| bits & (1 << f.index()) != 0)
            .collect();
        assert_eq!(set.len(), bits.count_ones() as usize);
        let back: FlagSet<HoverInfo> = set.encode().parse().unwrap();
        assert_eq!(back, set);
    }
}

#[test]
fn decoding_rejects_tokens_of_other_universes() {
    let err = serde_json::from_value::<Surface>(json!({"hoverinfo": "x+skip"})).unwrap_err();
    assert!(err.to_string().contains("unknown hoverinfo flag `skip`"));

    let image: Image = serde_json::from_value(json!({"hoverinfo": "color+x"})).unwrap();
    assert_eq!(
        image.hover_info,
        Some(ImageHoverInfo::X | ImageHoverInfo::Color)
    );
}
