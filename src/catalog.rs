//! Built-in action catalogue: every command the application menu knows about,
//! with its default English title, plus the default shortcut bindings.

pub const ACTIONS: &[(&str, &str)] = &[
    // File
    ("file-new", "&New…"),
    ("file-open", "&Open…"),
    ("file-import", "&Import…"),
    ("file-close", "&Close"),
    ("file-save", "&Save"),
    ("file-save-as", "Save &As…"),
    ("file-save-a-copy", "Save a Cop&y…"),
    ("file-save-selection", "Save Se&lection…"),
    ("file-save-online", "Save Online…"),
    ("file-import-pdf", "Import &PDF…"),
    ("file-export", "&Export…"),
    ("edit-info", "Score Propert&ies…"),
    ("parts", "&Parts…"),
    ("print", "&Print…"),
    ("quit", "&Quit"),
    // Edit
    ("undo", "&Undo"),
    ("redo", "&Redo"),
    ("cut", "Cu&t"),
    ("copy", "&Copy"),
    ("paste", "&Paste"),
    ("paste-half", "Paste &Half Duration"),
    ("paste-double", "Paste &Double Duration"),
    ("paste-special", "Paste S&pecial"),
    ("swap", "&Swap with Clipboard"),
    ("delete", "De&lete"),
    ("select-all", "Select &All"),
    ("select-similar", "Select All Si&milar Elements"),
    ("find", "&Find / Go To"),
    ("preference-dialog", "&Preferences…"),
    // View
    ("toggle-palette", "&Palettes"),
    ("masterpalette", "&Master Palette"),
    ("inspector", "&Inspector"),
    ("toggle-playpanel", "Play Panel"),
    ("toggle-navigator", "&Navigator"),
    ("toggle-timeline", "&Timeline"),
    ("toggle-mixer", "Mi&xer"),
    ("synth-control", "&Synthesizer"),
    ("toggle-selection-window", "Selection &Filter"),
    ("toggle-piano", "Piano &Keyboard"),
    ("toggle-scorecmp-tool", "Score &Comparison Tool"),
    ("zoomin", "Zoom &In"),
    ("zoomout", "Zoom &Out"),
    ("select-workspace", "Select Workspace"),
    ("new-workspace", "&New…"),
    ("edit-workspace", "&Edit…"),
    ("delete-workspace", "&Delete…"),
    ("reset-workspace", "&Reset…"),
    ("split-h", "Show Documents &Side by Side"),
    ("split-v", "Show Documents &Stacked"),
    ("show-invisible", "Show &Invisible"),
    ("show-unprintable", "Show Formatting"),
    ("show-frames", "Show &Frames"),
    ("show-pageborders", "Show Page &Margins"),
    ("mark-irregular", "Mark Irregular Measures"),
    ("fullscreen", "&Full Screen"),
    // Add > Notes
    ("note-input", "N&ote Input"),
    ("note-c", "C"),
    ("note-d", "D"),
    ("note-e", "E"),
    ("note-f", "F"),
    ("note-g", "G"),
    ("note-a", "A"),
    ("note-b", "B"),
    ("chord-c", "Add C to Chord"),
    ("chord-d", "Add D to Chord"),
    ("chord-e", "Add E to Chord"),
    ("chord-f", "Add F to Chord"),
    ("chord-g", "Add G to Chord"),
    ("chord-a", "Add A to Chord"),
    ("chord-b", "Add B to Chord"),
    // Add > Intervals
    ("interval1", "&Unison Above"),
    ("interval2", "&Second Above"),
    ("interval3", "&Third Above"),
    ("interval4", "&Fourth Above"),
    ("interval5", "F&ifth Above"),
    ("interval6", "Si&xth Above"),
    ("interval7", "Se&venth Above"),
    ("interval8", "&Octave Above"),
    ("interval9", "&Ninth Above"),
    ("interval-2", "Second Below"),
    ("interval-3", "Third Below"),
    ("interval-4", "Fourth Below"),
    ("interval-5", "Fifth Below"),
    ("interval-6", "Sixth Below"),
    ("interval-7", "Seventh Below"),
    ("interval-8", "Octave Below"),
    ("interval-9", "Ninth Below"),
    // Add > Tuplets
    ("duplet", "&Duplet"),
    ("triplet", "&Triplet"),
    ("quadruplet", "&Quadruplet"),
    ("quintuplet", "Q&uintuplet"),
    ("sextuplet", "&Sextuplet"),
    ("septuplet", "Se&ptuplet"),
    ("octuplet", "&Octuplet"),
    ("nonuplet", "&Nonuplet"),
    ("tuplet-dialog", "Othe&r…"),
    // Add > Measures
    ("insert-measure", "Insert One Measure"),
    ("insert-measures", "Insert Measures…"),
    ("append-measure", "Append One Measure"),
    ("append-measures", "Append Measures…"),
    // Add > Frames
    ("insert-hbox", "Insert &Horizontal Frame"),
    ("insert-vbox", "Insert &Vertical Frame"),
    ("insert-textframe", "Insert &Text Frame"),
    ("append-hbox", "Append H&orizontal Frame"),
    ("append-vbox", "Append V&ertical Frame"),
    ("append-textframe", "Append Te&xt Frame"),
    // Add > Text
    ("title-text", "&Title"),
    ("subtitle-text", "&Subtitle"),
    ("composer-text", "&Composer"),
    ("poet-text", "&Lyricist"),
    ("part-text", "&Part Name"),
    ("system-text", "S&ystem Text"),
    ("staff-text", "St&aff Text"),
    ("expression-text", "E&xpression Text"),
    ("rehearsalmark-text", "&Rehearsal Mark"),
    ("instrument-change-text", "&Instrument Change"),
    ("fingering-text", "&Fingering"),
    ("sticking-text", "Stic&king"),
    ("chord-text", "Chor&d Symbol"),
    ("roman-numeral-text", "R&oman Numeral Analysis"),
    ("nashville-number-text", "&Nashville Number"),
    ("lyrics", "L&yrics"),
    ("figured-bass", "Figured &Bass"),
    ("tempo", "Tempo &Marking"),
    // Add > Lines
    ("add-slur", "Slur"),
    ("add-hairpin", "Crescendo"),
    ("add-hairpin-reverse", "Decrescendo"),
    ("add-8va", "Ottava 8va &alta"),
    ("add-8vb", "Ottava 8va &bassa"),
    ("add-noteline", "Note Anchored Line"),
    // Format
    ("edit-style", "&Style…"),
    ("page-settings", "&Page Settings…"),
    ("stretch+", "&Increase Layout Stretch"),
    ("stretch-", "&Decrease Layout Stretch"),
    ("reset-stretch", "&Reset Layout Stretch"),
    ("reset-text-style-overrides", "Reset &Text Style Overrides"),
    ("reset-beammode", "Reset &Beams"),
    ("reset", "Reset Shapes and &Positions"),
    ("load-style", "&Load Style…"),
    ("save-style", "S&ave Style…"),
    // Tools
    ("transpose", "&Transpose…"),
    ("explode", "&Explode"),
    ("implode", "Imp&lode"),
    ("realize-chord-symbols", "Realize &Chord Symbols"),
    ("voice-x12", "Exchange Voice &1-2"),
    ("voice-x13", "Exchange Voice 1-3"),
    ("voice-x14", "Exchange Voice 1-4"),
    ("voice-x23", "Exchange Voice &2-3"),
    ("voice-x24", "Exchange Voice 2-4"),
    ("voice-x34", "Exchange Voice &3-4"),
    ("split-measure", "&Split Measure Before Selected Note/Rest"),
    ("join-measures", "&Join Selected Measures"),
    ("time-delete", "Remove Selected Ran&ge"),
    ("slash-fill", "&Fill With Slashes"),
    ("slash-rhythm", "Toggle Rhythmic Sl&ash Notation"),
    ("pitch-spell", "Respell &Pitches"),
    ("reset-groupings", "Regroup &Rhythms"),
    ("resequence-rehearsal-marks", "Resequence Re&hearsal Marks"),
    ("unroll-repeats", "Unroll Repeats"),
    ("copy-lyrics-to-clipboard", "Copy Lyrics to Clipboard"),
    ("fotomode", "&Image Capture"),
    ("del-empty-measures", "Remove Empty Trailing Me&asures"),
    // Help
    ("online-handbook", "&Online Handbook"),
    ("show-tours", "&Show Tours"),
    ("reset-tours", "&Reset All Tours"),
    ("about", "&About…"),
    ("about-qt", "About &Qt…"),
    ("about-musicxml", "About &MusicXML…"),
    ("check-update", "Check for &Update"),
    ("ask-help", "Ask for Help"),
    ("report-bug", "Report a Bug"),
    ("leave-feedback", "Feedback"),
    ("revert-factory", "Revert to Factory Settings"),
];

pub const SHORTCUTS: &[(&str, &str)] = &[
    ("file-new", "Ctrl+N"),
    ("file-open", "Ctrl+O"),
    ("file-close", "Ctrl+W"),
    ("file-save", "Ctrl+S"),
    ("file-save-as", "Ctrl+Shift+S"),
    ("print", "Ctrl+P"),
    ("quit", "Ctrl+Q"),
    ("undo", "Ctrl+Z"),
    ("redo", "Ctrl+Shift+Z"),
    ("cut", "Ctrl+X"),
    ("copy", "Ctrl+C"),
    ("paste", "Ctrl+V"),
    ("swap", "Ctrl+Shift+X"),
    ("delete", "Del"),
    ("select-all", "Ctrl+A"),
    ("select-similar", "Ctrl+Shift+A"),
    ("find", "Ctrl+F"),
    ("toggle-palette", "F9"),
    ("masterpalette", "Shift+F9"),
    ("inspector", "F8"),
    ("toggle-playpanel", "F11"),
    ("toggle-navigator", "F12"),
    ("toggle-mixer", "F10"),
    ("toggle-piano", "P"),
    ("zoomin", "Ctrl++"),
    ("zoomout", "Ctrl+-"),
    ("fullscreen", "Ctrl+U"),
    ("note-input", "N"),
    ("note-c", "C"),
    ("note-d", "D"),
    ("note-e", "E"),
    ("note-f", "F"),
    ("note-g", "G"),
    ("note-a", "A"),
    ("note-b", "B"),
    ("chord-c", "Shift+C"),
    ("chord-d", "Shift+D"),
    ("chord-e", "Shift+E"),
    ("chord-f", "Shift+F"),
    ("chord-g", "Shift+G"),
    ("chord-a", "Shift+A"),
    ("chord-b", "Shift+B"),
    ("interval2", "Alt+2"),
    ("interval3", "Alt+3"),
    ("interval4", "Alt+4"),
    ("interval5", "Alt+5"),
    ("interval6", "Alt+6"),
    ("interval7", "Alt+7"),
    ("interval8", "Alt+8"),
    ("interval9", "Alt+9"),
    ("duplet", "Ctrl+2"),
    ("triplet", "Ctrl+3"),
    ("quadruplet", "Ctrl+4"),
    ("quintuplet", "Ctrl+5"),
    ("sextuplet", "Ctrl+6"),
    ("septuplet", "Ctrl+7"),
    ("octuplet", "Ctrl+8"),
    ("nonuplet", "Ctrl+9"),
    ("insert-measure", "Ins"),
    ("append-measure", "Ctrl+B"),
    ("system-text", "Ctrl+Shift+T"),
    ("staff-text", "Ctrl+T"),
    ("expression-text", "Ctrl+E"),
    ("rehearsalmark-text", "Ctrl+M"),
    ("fingering-text", "Ctrl+Shift+F"),
    ("chord-text", "Ctrl+K"),
    ("lyrics", "Ctrl+L"),
    ("figured-bass", "Ctrl+G"),
    ("tempo", "Alt+T"),
    ("add-slur", "S"),
    ("add-hairpin", "<"),
    ("add-hairpin-reverse", ">"),
    ("add-8va", "Alt+O"),
    ("add-8vb", "Alt+Shift+O"),
    ("stretch+", "}"),
    ("stretch-", "{"),
    ("reset", "Ctrl+R"),
    ("online-handbook", "F1"),
];
