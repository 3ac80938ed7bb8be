/// Notice emitted after the first line of every generated bridging header.
const GENERATED_NOTICE: &str = "//
//  This bridging header has been automatically generated by bridgegen
//  DO NOT EDIT MANUALLY.
//  USE THE TOOL TO REGENERATE IF YOU NEED TO ADD/REMOVE HEADERS.
//

";

/// Build the content of one bridging header.
///
/// The output starts with a comment block naming the target, followed by one
/// import per header in the order given. A header whose filename equals the
/// target name is skipped, so a previously generated file picked up by the
/// scan never imports itself. With a framework name the imports are
/// framework-qualified (`#import <Framework/Header.h>`), otherwise they are
/// local quoted imports (`#import "Header.h"`).
pub fn assemble<I>(target_name: &str, framework_name: Option<&str>, headers: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut content = format!("//  {}\n{}", target_name, GENERATED_NOTICE);

    for header in headers {
        let header = header.as_ref();
        if header == target_name {
            continue;
        }

        match framework_name {
            Some(framework) => {
                content.push_str(&format!("#import <{}/{}>\n", framework, header));
            }
            None => {
                content.push_str(&format!("#import \"{}\"\n", header));
            }
        }
    }

    content
}
