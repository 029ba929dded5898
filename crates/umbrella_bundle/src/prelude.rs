/// Helpers every bundle starts with: the `inherit` helper used by module
/// bodies, a no-op `include` so directives are harmless at run time, and the
/// `String` polyfills the modules rely on.
pub(crate) const PRELUDE: &str = r#"function inherit(childCtor, parentCtor) {
  /** @constructor */
  function tempCtor() {};
  tempCtor.prototype = parentCtor.prototype;
  childCtor.prototype = new tempCtor();
  /** @override */
  childCtor.prototype.constructor = childCtor;
};
function include(jsFile) {};
if (!String.prototype.format) {
  String.prototype.format = function() {
    var args = arguments;
    return this.replace(/{(\d+)}/g, function(match, number) {
      return typeof args[number] != 'undefined' ? args[number] : match;
    });
  };
}
if (!String.prototype.paddingLeft) {
  String.prototype.paddingLeft = function(paddingValue) {
    return String(paddingValue + this).slice(-paddingValue.length);
  };
}
"#;
