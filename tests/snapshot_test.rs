use pretty_assertions::assert_eq;

// Snapshots are only possible for inputs with every coordinate explicit;
// anything else draws random positions.

#[test]
fn snapshot_forward_conversion() {
    let input = r#"<?xml version="1.0"?>
<gxl>
    <graph>
        <node id="n1" label="Start">
            <attr name="x"><float>10</float></attr>
            <attr name="y"><float>20</float></attr>
            <attr name="kind"><string>entry</string></attr>
        </node>
        <node id="n2">
            <attr name="x"><float>30.5</float></attr>
            <attr name="y"><float>40</float></attr>
        </node>
        <edge from="n1" to="n2"/>
    </graph>
</gxl>"#;
    let output = gxj::gxl_to_json(input).unwrap();
    let expected = r##"{
  "directed": false,
  "graph": [],
  "multigraph": false,
  "nodes": [
    {
      "id": "n1",
      "label": "Start",
      "x": 10.0,
      "y": 20.0,
      "size": 1,
      "color": "#000000",
      "kind": "entry"
    },
    {
      "id": "n2",
      "label": "",
      "x": 30.5,
      "y": 40.0,
      "size": 1,
      "color": "#000000"
    }
  ],
  "edges": [
    {
      "id": "e0",
      "label": "e0",
      "source": "n1",
      "target": "n2",
      "weight": "1",
      "color": "#000000",
      "size": 1
    }
  ]
}"##;
    assert_eq!(output, expected);
}

#[test]
fn snapshot_reverse_conversion() {
    let input = r##"{
  "directed": false,
  "graph": [],
  "multigraph": false,
  "nodes": [
    {
      "id": "n1",
      "label": "Start",
      "x": 10.0,
      "y": 20.0,
      "size": 1,
      "color": "#000000",
      "kind": "entry"
    }
  ],
  "edges": [
    {
      "id": "e0",
      "label": "e0",
      "source": "n1",
      "target": "n1",
      "weight": "1",
      "color": "#000000",
      "size": 1
    }
  ]
}"##;
    let output = gxj::json_to_gxl(input).unwrap();
    let expected = "<?xml version=\"1.0\"?>
<!DOCTYPE gxl SYSTEM \"http://www.gupro.de/GXL/gxl-1.0.dtd\">
<gxl>
\t<graph>
\t\t<node id=\"n1\" label=\"Start\">
\t\t\t<attr name=\"x\">
\t\t\t\t<float>10</float>
\t\t\t</attr>
\t\t\t<attr name=\"y\">
\t\t\t\t<float>20</float>
\t\t\t</attr>
\t\t\t<attr name=\"kind\">
\t\t\t\t<string>entry</string>
\t\t\t</attr>
\t\t</node>
\t\t<edge from=\"n1\" to=\"n1\"/>
\t</graph>
</gxl>";
    assert_eq!(output, expected);
}
