use super::*;

#[test]
fn every_tool_maps_to_its_engine_counterpart() {
    assert_eq!(map_tool(ToolType::Pencil), CanvasTool::Pencil);
    assert_eq!(map_tool(ToolType::Circle), CanvasTool::Circle);
    assert_eq!(map_tool(ToolType::Square), CanvasTool::Square);
    assert_eq!(map_tool(ToolType::Triangle), CanvasTool::Triangle);
    assert_eq!(map_tool(ToolType::Arrow), CanvasTool::Arrow);
    assert_eq!(map_tool(ToolType::Text), CanvasTool::Text);
    assert_eq!(map_tool(ToolType::Eraser), CanvasTool::Eraser);
}

#[test]
fn default_tool_maps_to_default_tool() {
    assert_eq!(map_tool(ToolType::default()), CanvasTool::default());
}
